use actix_web::{App, HttpServer};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{error, info};
use std::fs::OpenOptions;
use std::io;
use std::process;
use std::time::Duration;
use tokio::io::BufReader;

use letterd::handlers;
use letterd::services::remote_counter::DEFAULT_BASE_URL;
use letterd::shell::Shell;
use letterd::{AnalysisEngine, AnalysisKind, ClientConfig, Mode, RemoteCounter};

// Function to initialize logging
fn init_logging(log_file: Option<&String>) -> io::Result<()> {
    if let Some(file) = log_file {
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)?;

        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(log_output)))
            .init();
    } else {
        env_logger::init();
    }
    Ok(())
}

fn client_args() -> [Arg; 3] {
    [
        Arg::new("server")
            .long("server")
            .num_args(1)
            .default_value(DEFAULT_BASE_URL)
            .help("Base URL of the counting service used in online mode"),
        Arg::new("offline")
            .long("offline")
            .action(ArgAction::SetTrue)
            .help("Start in offline mode (count locally)"),
        Arg::new("timeout")
            .long("timeout")
            .num_args(1)
            .value_parser(value_parser!(u64))
            .default_value("10")
            .help("Seconds to wait for the counting service"),
    ]
}

fn build_engine(matches: &ArgMatches) -> io::Result<(AnalysisEngine, Mode)> {
    let config = ClientConfig {
        base_url: matches
            .get_one::<String>("server")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        timeout: Duration::from_secs(matches.get_one::<u64>("timeout").copied().unwrap_or(10)),
    };
    let remote = RemoteCounter::new(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let mode = if matches.get_flag("offline") { Mode::Offline } else { Mode::Online };
    Ok((AnalysisEngine::new(remote), mode))
}

async fn serve(listen_host: &str) -> io::Result<()> {
    info!("Starting counting service on {}", listen_host);
    HttpServer::new(|| App::new().configure(handlers::configure))
        .bind(listen_host)?
        .run()
        .await
}

async fn analyze_once(matches: &ArgMatches) -> io::Result<()> {
    let (engine, mode) = build_engine(matches)?;
    let kind = matches
        .get_one::<String>("kind")
        .map(|k| k.parse::<AnalysisKind>())
        .unwrap_or(Ok(AnalysisKind::Vowels))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let text = matches
        .get_many::<String>("text")
        .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    info!("Analyzing {} via {} counter ({} mode)", kind, engine.counter_for(mode).name(), mode);
    match engine.analyze(&text, kind, mode).await {
        Ok(result) => {
            println!("{}", result);
            Ok(())
        }
        Err(e) => {
            error!("Analysis of {} failed: {}", kind, e);
            eprintln!("analysis failed: {}", e);
            process::exit(1);
        }
    }
}

async fn run_shell(matches: &ArgMatches) -> io::Result<()> {
    let (engine, mode) = build_engine(matches)?;
    info!("Starting shell in {} mode using the {} counter", mode, engine.counter_for(mode).name());
    let mut shell = Shell::new(engine, mode);
    shell.run(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let matches = Command::new("letterd")
        .version("1.0")
        .author("Ron Straight <straightre@gmail.com>")
        .about("Vowel and consonant counting service and client")
        .subcommand_required(true)
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .global(true)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .subcommand(
            Command::new("serve")
                .about("Run the counting service")
                .arg(
                    Arg::new("listen-host")
                        .long("listen-host")
                        .num_args(1)
                        .default_value("0.0.0.0:8080")
                        .help("Specify the listen address (e.g., 0.0.0.0:8080)"),
                ),
        )
        .subcommand(
            Command::new("analyze")
                .about("Analyze one text and print the result")
                .args(client_args())
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .num_args(1)
                        .value_parser(["vowels", "consonants"])
                        .default_value("vowels")
                        .help("What to count"),
                )
                .arg(
                    Arg::new("text")
                        .num_args(1..)
                        .required(true)
                        .help("Text to analyze"),
                ),
        )
        .subcommand(
            Command::new("shell")
                .about("Analyze texts interactively, toggling between online and offline")
                .args(client_args()),
        )
        .get_matches();

    let Some((name, sub)) = matches.subcommand() else {
        unreachable!("a subcommand is required");
    };
    init_logging(sub.get_one::<String>("log-file"))?;

    match name {
        "serve" => {
            let listen_host = sub
                .get_one::<String>("listen-host")
                .cloned()
                .unwrap_or_else(|| "0.0.0.0:8080".to_string());
            serve(&listen_host).await
        }
        "analyze" => analyze_once(sub).await,
        "shell" => run_shell(sub).await,
        other => unreachable!("unknown subcommand {}", other),
    }
}
