use tokio::io::BufReader;
use tracing::info;

use qa_chat::repl;
use qa_chat::settings::ClientSettings;
use qa_chat::HttpBackend;
use qa_chat_core::ConversationState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    qa_chat::telemetry::init("qa_chat=warn,qa_chat_core=warn");

    let settings = ClientSettings::from_env();
    let backend = HttpBackend::new(&settings.api_base)?;
    info!("Asking {}", backend.chat_url());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    repl::run(stdin, &mut stdout, &backend, ConversationState::new()).await?;
    Ok(())
}
