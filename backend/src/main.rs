use std::process::ExitCode;

use hotsauce_server::start_server;

#[tokio::main]
async fn main() -> ExitCode {
    match start_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server failed: {e}");
            ExitCode::FAILURE
        }
    }
}
