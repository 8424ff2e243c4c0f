use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = agora_seed::Args::parse();
	agora_seed::run(args).await
}
