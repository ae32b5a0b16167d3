//! mpdwire CLI Client
//!
//! Command-line interface for talking to a music player daemon.

use clap::{Parser, Subcommand};
use mpdwire::{Command, Config, Connection, Record};
use tracing_subscriber::{fmt, EnvFilter};

/// mpdwire CLI
#[derive(Parser, Debug)]
#[command(name = "mpdwire-cli")]
#[command(about = "Talk to a music player daemon")]
#[command(version)]
struct Args {
    /// Server address
    #[arg(short, long, default_value = mpdwire::config::DEFAULT_ADDRESS)]
    address: String,

    /// Password sent after connecting
    #[arg(short, long, default_value = "")]
    password: String,

    /// Socket read/write timeout in milliseconds (0 disables)
    #[arg(short, long, default_value = "0")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show player status
    Status,

    /// Show database statistics
    Stats,

    /// Show the current song
    Current,

    /// List audio outputs
    Outputs,

    /// Start playback
    Play {
        /// Queue position to play
        pos: Option<u32>,
    },

    /// Toggle between play and pause
    Pause,

    /// Stop playback
    Stop,

    /// Skip to the next song
    Next,

    /// Skip to the previous song
    Prev,

    /// Set the volume
    Volume {
        /// New volume (0-100), or a delta with --relative
        #[arg(allow_hyphen_values = true)]
        value: i32,

        /// Adjust relative to the current volume
        #[arg(short, long)]
        relative: bool,
    },

    /// Search the database
    Search {
        /// Tag to search in (artist, album, title, any, ...)
        tag: String,

        /// Text to search for
        term: String,
    },

    /// Wait for the next change and print the changed subsystems
    Idle,

    /// Send an arbitrary command and print every decoded record
    Raw {
        /// Command verb
        verb: String,

        /// Command arguments
        args: Vec<String>,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,mpdwire=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .address(&args.address)
        .password(&args.password)
        .read_timeout_ms(args.timeout_ms)
        .write_timeout_ms(args.timeout_ms)
        .build();

    if let Err(e) = run(&config, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config, command: Commands) -> mpdwire::Result<()> {
    let mut conn = Connection::dial(config)?;
    tracing::debug!(
        "Connected to {} {}",
        conn.product().unwrap_or("server"),
        conn.protocol_version().map(|v| v.to_string()).unwrap_or_default()
    );

    match command {
        Commands::Status => {
            let status = conn.status()?;
            println!("state:    {:?}", status.state);
            println!("volume:   {}", status.volume);
            println!("song:     {}/{}", status.song, status.playlist_length);
            println!("elapsed:  {:.1}", status.elapsed);
            println!(
                "repeat: {}  random: {}  single: {}  consume: {}",
                status.repeat, status.random, status.single, status.consume
            );
        }
        Commands::Stats => {
            let stats = conn.stats()?;
            println!("artists:  {}", stats.artists);
            println!("albums:   {}", stats.albums);
            println!("songs:    {}", stats.songs);
            println!("uptime:   {}", stats.uptime);
        }
        Commands::Current => match conn.current_song()? {
            Some(song) => println!("{} - {} ({})", song.artist, song.title, song.file),
            None => println!("no current song"),
        },
        Commands::Outputs => {
            for output in conn.outputs()? {
                let mark = if output.enabled { "*" } else { " " };
                println!("{} {} {}", mark, output.id, output.name);
            }
        }
        Commands::Play { pos } => conn.play(pos)?,
        Commands::Pause => conn.toggle()?,
        Commands::Stop => conn.stop()?,
        Commands::Next => conn.next()?,
        Commands::Prev => conn.previous()?,
        Commands::Volume { value, relative } => {
            let volume = conn.set_volume(value, relative)?;
            println!("volume: {}", volume);
        }
        Commands::Search { tag, term } => {
            for song in conn.search(&tag, &term)? {
                println!("{}", song.file);
            }
        }
        Commands::Idle => {
            for subsystem in conn.idle()? {
                println!("{}", subsystem.name());
            }
        }
        Commands::Raw { verb, args } => {
            let command = args
                .into_iter()
                .fold(Command::new(verb), |cmd, arg| cmd.arg(arg));
            let records = conn.request_list(&command)?;
            for (i, record) in records.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_record(record);
            }
        }
    }

    conn.close()
}

fn print_record(record: &Record) {
    for (key, value) in record.iter() {
        println!("{}: {}", key, value);
    }
}
