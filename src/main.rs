use click_chess::frontend::terminal::run_stdio_loop;
use click_chess::session::session_config::SessionConfig;

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = SessionConfig::from_args(&args).map_err(|e| e.to_string())?;
    run_stdio_loop(config).map_err(|e| format!("terminal I/O failed: {e}"))
}
