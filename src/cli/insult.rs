//! The fetch-and-print command.

use std::time::Duration;

use crate::cli::args::Cli;
use crate::core::client::InsultClient;
use crate::core::models::RawInsult;
use crate::core::request::{BASE_URL, InsultRequest, Language, RequestKind, ResponseFormat};
use crate::error::Result;

/// Execute the fetch described by the parsed arguments.
///
/// # Errors
///
/// Invalid `--format`/`--lang` values fail before any network I/O; after
/// that, whatever the client fetch fails with.
pub async fn execute(cli: &Cli) -> Result<()> {
    let format: ResponseFormat = cli.format.parse()?;
    let language: Language = cli.lang.parse()?;
    let who = cli.who.as_deref();

    if cli.url {
        let mut request = InsultRequest::new(RequestKind::Insult, format)
            .language(language)
            .plural(cli.plural);
        if let Some(who) = who {
            request = request.who(who);
        }
        let base = cli.base_url.as_deref().unwrap_or(BASE_URL);
        println!("{}", request.url_with_base(base));
        return Ok(());
    }

    let timeout = Duration::from_secs(cli.timeout);
    let client = match cli.base_url.as_deref() {
        Some(base) => InsultClient::with_base_url(base, timeout)?,
        None => InsultClient::with_timeout(timeout)?,
    };

    if cli.raw {
        match client.fetch_raw(format, language, who, cli.plural).await? {
            RawInsult::Text(body) => print!("{body}"),
            RawInsult::Json(payload) => println!("{}", serde_json::to_string_pretty(&payload)?),
        }
        return Ok(());
    }

    let insult = client.fetch_insult(language, who, cli.plural).await?;
    println!("{insult}");
    Ok(())
}
