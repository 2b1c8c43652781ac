use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

pub fn init_logger(args: &LogArgs) {
    let filter = args.filter.parse::<EnvFilter>().unwrap_or_else(|err| {
        eprintln!("invalid log filter '{}': {}, falling back to info", args.filter, err);
        EnvFilter::new("info")
    });

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if args.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
