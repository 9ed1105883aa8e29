use wordle_sim::cli::{parse_cli, run};
use wordle_sim::logging::init_logging;

fn main() {
    init_logging();
    let cli = parse_cli();
    run(&cli);
}
