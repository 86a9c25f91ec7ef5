use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotuser::{PlaylistDetails, TimeRange, TopItemType, cli, config, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the authenticated user's profile
    Me,

    /// List the user's playlists
    Playlists,

    /// Create a new playlist
    Create(CreateOptions),

    /// Change name, visibility or description of a playlist
    Details(DetailsOptions),

    /// Add tracks to a playlist
    Add(TracksOptions),

    /// Remove tracks from a playlist
    Remove(TracksOptions),

    /// Replace all tracks of a playlist (max 100)
    Replace(TracksOptions),

    /// Show top artists or tracks
    Top(TopOptions),

    /// Follow a playlist
    Follow(FollowOptions),

    /// Unfollow a playlist
    Unfollow(PlaylistIdOption),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CreateOptions {
    /// Playlist name
    name: String,
    /// Show the playlist on the user's profile
    #[clap(long)]
    public: Option<bool>,
    /// Let followers edit the playlist
    #[clap(long)]
    collaborative: Option<bool>,
    #[clap(long)]
    description: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct DetailsOptions {
    /// Playlist id
    id: String,
    #[clap(long)]
    name: Option<String>,
    #[clap(long)]
    public: Option<bool>,
    #[clap(long)]
    collaborative: Option<bool>,
    #[clap(long)]
    description: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Playlist id
    id: String,
    /// Track uris, e.g. spotify:track:4iV5W9uYEdYUVa79Axb7Rh
    #[clap(required = true, num_args = 1..)]
    uris: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct TopOptions {
    /// artists or tracks
    item_type: TopItemType,
    /// short, medium or long
    #[clap(long, default_value = "medium")]
    term: TimeRange,
    /// Number of items (1-50)
    #[clap(long)]
    limit: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct FollowOptions {
    /// Playlist id
    id: String,
    /// Keep the playlist off the user's public profile
    #[clap(long)]
    private: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistIdOption {
    /// Playlist id
    id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn main() {
    if let Err(e) = config::load_env() {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Me => cli::me(),
        Command::Playlists => cli::playlists(),
        Command::Create(opt) => {
            cli::create_playlist(opt.name, opt.public, opt.collaborative, opt.description)
        }
        Command::Details(opt) => cli::change_details(
            opt.id,
            PlaylistDetails {
                name: opt.name,
                public: opt.public,
                collaborative: opt.collaborative,
                description: opt.description,
            },
        ),
        Command::Add(opt) => cli::add_tracks(opt.id, opt.uris),
        Command::Remove(opt) => cli::remove_tracks(opt.id, opt.uris),
        Command::Replace(opt) => cli::replace_tracks(opt.id, opt.uris),
        Command::Top(opt) => cli::top(opt.item_type, opt.term, opt.limit),
        Command::Follow(opt) => cli::follow(opt.id, !opt.private),
        Command::Unfollow(opt) => cli::unfollow(opt.id),
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
