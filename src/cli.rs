use crate::state::SiteState;
use crate::tools::{
    GetExampleRequest, OpenSectionRequest, SearchRequest, SetThemeRequest, ThemeMode,
    handle_get_example, handle_open_section, handle_search, handle_set_theme,
};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "gantt-docs")]
#[command(about = "Search and browse the React Modern Gantt documentation", long_about = None)]
pub struct Cli {
    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the MCP server on stdio
    Serve,
    /// Rank documentation sections against a query
    Search {
        #[arg(default_value = "")]
        query: String,
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show a section's route, anchor and samples
    Open { id: String },
    /// Print a code sample
    Example {
        id: String,
        #[arg(long)]
        no_line_numbers: bool,
    },
    /// Show or change the theme preference
    Theme {
        #[arg(value_enum)]
        mode: Option<ThemeMode>,
    },
}

/// Run a one-shot command against `state`, returning the text to print.
pub fn execute(state: &SiteState, command: Commands) -> Result<String, String> {
    match command {
        Commands::Serve => {
            Err("`serve` runs the MCP server and has no one-shot output".to_string())
        }
        Commands::Search { query, limit } => handle_search(state, &SearchRequest { query, limit }),
        Commands::Open { id } => handle_open_section(state, &OpenSectionRequest { id }),
        Commands::Example {
            id,
            no_line_numbers,
        } => handle_get_example(
            state,
            &GetExampleRequest {
                id,
                line_numbers: !no_line_numbers,
            },
        ),
        Commands::Theme { mode } => handle_set_theme(state, &SetThemeRequest { mode }),
    }
}
