use clap::{Arg, Command};
use std::time::Duration;
use wordgate::{
    DEFAULT_ENDPOINT, GoogleTranslateProvider, SOURCE_LANGUAGE, TARGET_LANGUAGE, normalize,
    translate_word,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("wordgate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate a Turkish word to English")
        .arg(
            Arg::new("word")
                .help("Word to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .short('e')
                .help("Translation endpoint URL")
                .default_value(DEFAULT_ENDPOINT),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .short('t')
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("10"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show the normalized word and request URL")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let word = matches
        .get_one::<String>("word")
        .ok_or("missing word argument")?;
    let endpoint = matches
        .get_one::<String>("endpoint")
        .ok_or("missing endpoint argument")?;
    let timeout = matches
        .get_one::<u64>("timeout")
        .copied()
        .ok_or("missing timeout argument")?;
    let verbose = matches.get_flag("verbose");

    let provider = GoogleTranslateProvider::new(endpoint, Duration::from_secs(timeout))?;

    if verbose {
        let normalized = normalize(word);
        println!("📝 Source: \"{}\" → \"{}\"", word, normalized);
        println!("🌍 {} → {}", SOURCE_LANGUAGE, TARGET_LANGUAGE);
        println!("🔗 {}", provider.request_url(&normalized));
        println!();
    }

    match translate_word(&provider, word).await {
        Ok(result) => {
            println!("{}", result);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Translation failed: {}", e);
            Err(e.into())
        }
    }
}
