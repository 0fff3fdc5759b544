use clap::Parser;
use route_summaries::app::SummaryApp;

fn main() {
    env_logger::init();
    let args = SummaryApp::parse();
    match args.op.run() {
        Ok(status) => std::process::exit(status.code()),
        Err(e) => {
            log::error!("route-summaries failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
