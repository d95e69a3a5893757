use clap::{Parser, ValueEnum};

const EXAMPLES: &str = r#"Examples:
  $ cronfmt "*/15" 0 1,15 "*" 1-5 "/usr/bin/find / -type f .terraform"
  +-----------------+------------------------------------+
  | Cron Expression | Extended Format                    |
  +-----------------+------------------------------------+
  | minute          | 0 15 30 45                         |
  | hour            | 0                                  |
  | day of month    | 1 15                               |
  | month           | 1 2 3 4 5 6 7 8 9 10 11 12         |
  | day of week     | 1 2 3 4 5                          |
  | command         | /usr/bin/find / -type f .terraform |
  +-----------------+------------------------------------+

  $ cronfmt "*/18" "*/3" 5,15 "*" 1-5 "/usr/bin/call-home -m 'I am alive'"
  $ cronfmt --output json "*/5" 1,2,3,4,5 1 "*/4" 1-5 "/bin/cat /tmp/myHiddenFile""#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "cronfmt",
    version,
    about = "Cron expression parser",
    long_about = "Parses cron expressions and prints their extended space-separated format in stdout",
    after_long_help = EXAMPLES
)]
pub struct Config {
    #[arg(long, env = "CRONFMT_OUTPUT", value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// minute hour day-of-month month day-of-week command
    #[arg(
        value_name = "FIELDS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}
