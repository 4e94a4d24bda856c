#[tokio::main]
async fn main() {
  if let Err(e) = streakfit::run().await {
    eprintln!("streakfit: {}", e);
    std::process::exit(1);
  }
}
