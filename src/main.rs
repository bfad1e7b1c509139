// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use bughunt::commands::browse::BrowseCommand;
use bughunt::commands::comment::CommentCommand;
use bughunt::commands::search::{SearchCommand, SearchOptions};
use bughunt::commands::tools::ToolsCommand;
use bughunt::config::new_bughunt_config;
use bughunt::error::{Result, format_error_chain, get_exit_code};
use bughunt::logging;
use bughunt::models::SearchType;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bughunt")]
#[command(author, version, about = "Find contributor-friendly bugs in a Bugzilla tracker", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search open bugs for the selected tools
    #[command(visible_alias = "s")]
    #[command(long_about = "Search open bugs for the selected tools

Unassigned bugs are always listed. Assigned bugs are only listed once they
have been inactive for the configured number of days.

Examples:
  bughunt search -t inspector --type good-first
  bughunt search --all --type all-mentored --filter crash
  bughunt search -t console -t network --json")]
    Search {
        /// Tool key to search (repeatable, see 'bughunt tools')
        #[arg(short, long = "tool", value_name = "KEY")]
        tools: Vec<String>,

        /// Search every tool in the catalog
        #[arg(long, conflicts_with = "tools")]
        all: bool,

        /// Kind of bugs to look for
        #[arg(long = "type", value_enum, value_name = "TYPE")]
        search_type: Option<SearchType>,

        /// Only show bugs whose summary or id contains TEXT
        #[arg(long, value_name = "TEXT")]
        filter: Option<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,

        /// Disable progress indicators
        #[arg(long)]
        no_progress: bool,
    },

    /// List the tools that can be searched
    #[command(visible_alias = "ls")]
    Tools {
        /// Sort by tool name instead of catalog order
        #[arg(long)]
        sorted: bool,
    },

    /// Print the first comment of a bug
    Comment {
        /// Bug number
        bug_id: u64,
    },

    /// Browse bugs interactively
    #[command(visible_alias = "b")]
    Browse {
        /// Tool key to start with (repeatable)
        #[arg(short, long = "tool", value_name = "KEY")]
        tools: Vec<String>,

        /// Kind of bugs to start with
        #[arg(long = "type", value_enum, value_name = "TYPE")]
        search_type: Option<SearchType>,
    },
}

fn setup_logger(cli: &Cli) {
    logging::setup_logger(cli.verbose);
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger based on CLI flags and environment
    setup_logger(&cli);

    // Load configuration once at startup
    let config = match new_bughunt_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error_chain(&e));
            std::process::exit(get_exit_code(&e));
        }
    };

    let result: Result<()> = (|| match cli.command {
        Commands::Search {
            tools,
            all,
            search_type,
            filter,
            json,
            no_progress,
        } => {
            let command = SearchCommand::new(&config)?;
            command.execute(&SearchOptions {
                tools,
                all,
                search_type: search_type.unwrap_or_default(),
                filter,
                json,
                no_progress,
            })
        }
        Commands::Tools { sorted } => {
            let command = ToolsCommand::new(&config)?;
            command.execute(sorted)
        }
        Commands::Comment { bug_id } => {
            let command = CommentCommand::new(&config)?;
            command.execute(bug_id)
        }
        Commands::Browse { tools, search_type } => {
            let command = BrowseCommand::new(&config)?;
            command.execute(&tools, search_type.unwrap_or_default())
        }
    })();

    if let Err(e) = result {
        eprintln!("{}", format_error_chain(&e));
        std::process::exit(get_exit_code(&e));
    }
}
