use fibre_graph::Consumer;
use std::process::ExitCode;
use tracing::Level;

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_max_level(Level::WARN)
    .init();

  match Consumer::create() {
    Ok(consumer) => {
      print!("{}", consumer.present());
      ExitCode::SUCCESS
    }
    Err(err) => {
      eprintln!("error: {}", err.diagnostic());
      ExitCode::FAILURE
    }
  }
}
