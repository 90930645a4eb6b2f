use env_logger::Env;

fn main() {
    // Logs go to stderr; stdout carries the protocol.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    chessbot::uci::run_uci_loop();
}
