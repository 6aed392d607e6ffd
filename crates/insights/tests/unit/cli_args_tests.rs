//! Tests for command line parsing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use insights::cli::{Cli, Command};

    #[test]
    fn test_search_arguments() {
        let cli = Cli::try_parse_from([
            "insights", "search", "pricing fears", "-k", "3", "-b", "coaching", "-b", "saas",
            "--min-urgency", "4", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Search {
                query,
                top_k,
                business,
                min_urgency,
            } => {
                assert_eq!(query, "pricing fears");
                assert_eq!(top_k, 3);
                assert_eq!(business, ["coaching", "saas"]);
                assert_eq!(min_urgency, Some(4));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["insights", "urgent", "cash flow"]).unwrap();
        match cli.command {
            Command::Urgent {
                min_urgency, top_k, ..
            } => {
                assert_eq!(min_urgency, 4);
                assert_eq!(top_k, 5);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["insights", "--config", "alt.toml", "status"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("alt.toml")));
        assert!(matches!(cli.command, Command::Status));
    }

    #[test]
    fn test_urgency_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["insights", "urgent", "q", "--min-urgency", "9"]).is_err());
        assert!(Cli::try_parse_from(["insights", "search", "q", "--min-urgency", "0"]).is_err());
    }
}
