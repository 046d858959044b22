//! CLI module for geoipdat
//!
//! This module handles command line argument parsing and query logic.

use crate::config::AppConfig;
use crate::database::{DatabaseType, GeoIpDatabase, ResolvedLocation};
use crate::error::{GeoIpError, Result};
use crate::output;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "geoipdat")]
#[command(version, about = "Look up IPv4 addresses in legacy GeoIP .dat databases")]
#[command(long_about = "geoipdat resolves IPv4 addresses and host names against MaxMind's legacy\n\
    binary databases (GeoIP.dat, GeoIPRegion.dat, GeoIPCity.dat).\n\n\
    Queries come from the command line, or from stdin when none are given.\n\n\
    Examples:\n  \
    $ geoipdat 74.125.67.100\n  \
    $ geoipdat -e country www.google.com\n  \
    $ geoipdat --all -d /usr/share/GeoIP/GeoIPCity.dat 8.8.8.8\n  \
    $ tail -f access.log | geoipdat")]
pub struct Cli {
    /// IP addresses or host names (read from stdin when omitted)
    #[arg(value_name = "QUERY")]
    pub queries: Vec<String>,

    /// Database file to open instead of searching the data directory
    #[arg(short, long, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Edition to look for, in order of preference (city, region, country)
    #[arg(short = 'e', long = "edition", value_name = "EDITION", value_parser = parse_edition)]
    pub editions: Vec<DatabaseType>,

    /// Output JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Print every field of each result
    #[arg(short, long)]
    pub all: bool,

    /// Print the database edition and version string
    #[arg(long)]
    pub info: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Show debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_edition(name: &str) -> std::result::Result<DatabaseType, String> {
    DatabaseType::from_name(name).ok_or_else(|| format!("invalid edition '{}' (city, country or region)", name))
}

impl Cli {
    /// Log filter used when `RUST_LOG` is unset
    pub fn log_level(&self, config: &AppConfig) -> &'static str {
        if self.verbose || config.global.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    pub fn run(&self, mut config: AppConfig) -> Result<()> {
        // Apply CLI options to config
        if self.json {
            config.output.json = true;
        }
        if self.no_color || !atty::is(atty::Stream::Stdout) {
            config.output.enable_colors = false;
        }
        if self.verbose {
            config.global.verbose = true;
        }

        let db = self.open_database(&config)?;

        if self.info {
            println!("{}", db);
            if let Some(info) = db.database_info() {
                println!("{}", info);
            }
            if self.queries.is_empty() {
                return Ok(());
            }
        }

        if !self.queries.is_empty() {
            // Query from command line arguments
            for query in &self.queries {
                self.query_and_print(query, &db, &config)?;
            }
        } else {
            // Query from stdin (pipe mode or interactive mode)
            self.process_queries_from_stdin(&db, &config)?;
        }

        db.close();
        Ok(())
    }

    /// Open the database named on the command line or in the config, else search by edition
    fn open_database(&self, config: &AppConfig) -> Result<GeoIpDatabase> {
        let options = config.open_options();

        if let Some(path) = self.database.clone().or_else(|| config.database_path()) {
            return Ok(GeoIpDatabase::open_with(&path, &options)?);
        }

        let editions = if self.editions.is_empty() {
            config.preferred_editions()?
        } else {
            self.editions.clone()
        };
        if editions.is_empty() {
            return Err(GeoIpError::config("no database editions configured"));
        }

        Ok(GeoIpDatabase::open_preferring(&editions, &options)?)
    }

    /// Process queries from stdin (pipe or interactive mode)
    fn process_queries_from_stdin(&self, db: &GeoIpDatabase, config: &AppConfig) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        // Check if stdin is a TTY (interactive mode)
        if atty::is(atty::Stream::Stdin) {
            println!("geoipdat interactive mode, {} (type quit or Ctrl+D to exit)", db);

            for line in stdin.lock().lines() {
                let line = line?;
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                if trimmed == "quit" || trimmed == "exit" {
                    break;
                }

                self.query_and_print(trimmed, db, config)?;
                stdout.flush()?;
            }
        } else {
            // Pipe mode - annotate every address in the text
            let mut line = String::new();
            let mut input = stdin.lock();
            while input.read_line(&mut line)? > 0 {
                let result = self.process_line(&line, db, config)?;
                write!(stdout, "{}", result)?;
                line.clear();
            }
            stdout.flush()?;
        }

        Ok(())
    }

    /// Annotate one line of piped text
    fn process_line(&self, line: &str, db: &GeoIpDatabase, config: &AppConfig) -> Result<String> {
        if config.output.json {
            let mut result = String::new();
            for (_, _, ip) in output::matcher::find_ipv4(line) {
                let location = lookup_or_report(db, ip);
                result.push_str(&output::format_json(ip, location.as_ref(), false)?);
                result.push('\n');
            }
            return Ok(result);
        }

        Ok(output::annotate_line(
            line,
            |ip| lookup_or_report(db, ip).map(|location| location.to_string()),
            config.output.enable_colors,
        ))
    }

    /// Query and print a single address or host name
    fn query_and_print(&self, query: &str, db: &GeoIpDatabase, config: &AppConfig) -> Result<()> {
        let location = lookup_or_report(db, query);

        let rendered = if config.output.json {
            output::format_json(query, location.as_ref(), true)?
        } else if self.all {
            output::format_fields(query, location.as_ref())
        } else {
            output::format_result(query, location.as_ref(), config.output.enable_colors)
        };

        println!("{}", rendered);
        Ok(())
    }
}

/// Look up `query`, reporting a damaged database on stderr instead of aborting
fn lookup_or_report(db: &GeoIpDatabase, query: &str) -> Option<ResolvedLocation> {
    match db.lookup(query) {
        Ok(location) => location,
        Err(e) => {
            eprintln!("Query failed for {}: {}", query, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from([
            "geoipdat", "-e", "city", "--edition", "country", "-j", "--all", "8.8.8.8", "www.google.com",
        ])
        .unwrap();
        assert_eq!(cli.editions, vec![DatabaseType::CityRev1, DatabaseType::Country]);
        assert!(cli.json);
        assert!(cli.all);
        assert_eq!(cli.queries, vec!["8.8.8.8", "www.google.com"]);
        assert!(cli.database.is_none());
    }

    #[test]
    fn test_verbose_from_flag_or_config() {
        let quiet = Cli::try_parse_from(["geoipdat", "8.8.8.8"]).unwrap();
        let loud = Cli::try_parse_from(["geoipdat", "-v", "8.8.8.8"]).unwrap();
        let mut config = AppConfig::default();

        assert_eq!(quiet.log_level(&config), "warn");
        assert_eq!(loud.log_level(&config), "debug");

        config.global.verbose = true;
        assert_eq!(quiet.log_level(&config), "debug");
    }

    #[test]
    fn test_invalid_edition_rejected() {
        assert!(Cli::try_parse_from(["geoipdat", "-e", "isp", "8.8.8.8"]).is_err());
    }

    #[test]
    fn test_open_explicit_database() {
        use crate::database::testing::DatFileBuilder;

        let file = DatFileBuilder::new(DatabaseType::Country).insert("8.0.0.0/8", 225).write();
        let cli = Cli::try_parse_from(["geoipdat", "--no-color", "-d", file.path().to_str().unwrap()]).unwrap();
        let db = cli.open_database(&AppConfig::default()).unwrap();
        assert_eq!(db.edition(), DatabaseType::Country);

        let mut config = AppConfig::default();
        config.output.enable_colors = false;
        assert_eq!(
            cli.process_line("ping 8.8.8.8\n", &db, &config).unwrap(),
            "ping 8.8.8.8 [United States (US)]\n"
        );

        config.output.json = true;
        let json = cli.process_line("a 8.8.8.8 b 9.9.9.9\n", &db, &config).unwrap();
        assert_eq!(json.lines().count(), 2);
        assert!(json.lines().nth(1).unwrap().contains("\"result\":null"));
    }
}
