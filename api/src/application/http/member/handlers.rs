pub mod create_member;
pub mod delete_members;
pub mod get_member;
pub mod get_member_stats;
pub mod increment_ages;
pub mod rename_members;
pub mod search_members;
pub mod search_members_page;
