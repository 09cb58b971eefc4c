use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    taskpad::cli::run().await
}
