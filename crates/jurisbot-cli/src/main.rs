use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::{Parser, Subcommand};

use jurisbot_ai::ChatClient;
use jurisbot_scraper::StfClient;

mod assistant;
mod display;

use assistant::Assistant;

#[derive(Parser)]
#[command(name = "jurisbot", version, about = "Assistente jurídico para jurisprudências do STF")]
struct Cli {
    /// API key for the completion endpoint
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Chat-completion endpoint base URL
    #[arg(long, env = "OPENAI_BASE_URL", default_value = jurisbot_ai::DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Model used for answers and fallback generation
    #[arg(long, env = "JURISBOT_MODEL", default_value = jurisbot_ai::DEFAULT_MODEL, global = true)]
    model: String,

    /// Request timeout for the STF site, in seconds
    #[arg(long, default_value_t = 30, global = true)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search acórdãos by free-text query
    Search {
        /// Search terms
        query: Vec<String>,
        /// Maximum number of results
        #[arg(long, default_value_t = 5)]
        max_results: usize,
    },
    /// Show the full document for one docket number (e.g. "ADPF 54")
    Detail {
        /// Docket number
        docket: String,
    },
    /// Interactive legal-assistant session
    Chat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let scraper = StfClient::with_timeout(Duration::from_secs(cli.timeout))?;
    let chat = ChatClient::with_config(cli.api_url, cli.api_key.unwrap_or_default(), cli.model)?;
    let assistant = Assistant::new(chat, scraper);

    match cli.command {
        Command::Search { query, max_results } => {
            let query = query.join(" ");
            let records = assistant.search_with_fallback(&query, max_results).await?;
            display::print_search_records(&records);
        }
        Command::Detail { docket } => {
            let record = assistant.detail_with_fallback(&docket).await?;
            display::print_detail(&record);
        }
        Command::Chat => run_chat(&assistant).await?,
    }

    Ok(())
}

/// Terminal conversation loop; "sair"/"exit"/"quit" ends the session.
async fn run_chat(assistant: &Assistant) -> anyhow::Result<()> {
    println!("{}", "=".repeat(50));
    println!("JurisBot - Assistente Jurídico STF");
    println!("{}", "=".repeat(50));
    println!("Digite 'sair' para encerrar a conversa.\n");
    println!(
        "JurisBot: Olá! Sou o JurisBot, seu assistente jurídico especializado em \
         jurisprudências do STF. Como posso ajudar você hoje?"
    );

    let stdin = io::stdin();
    loop {
        print!("\nVocê: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let consulta = line.trim();
        if consulta.is_empty() {
            continue;
        }
        if matches!(consulta.to_lowercase().as_str(), "sair" | "exit" | "quit") {
            println!("\nJurisBot: Obrigado por utilizar o JurisBot. Até a próxima!");
            break;
        }

        match assistant.answer(consulta).await {
            Ok(reply) => println!("\nJurisBot: {reply}"),
            Err(err) => println!(
                "\nJurisBot: Desculpe, ocorreu um erro ao processar sua consulta: {err}"
            ),
        }
    }

    Ok(())
}
