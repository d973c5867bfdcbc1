//! CLI argument definitions using clap.

use clap::Parser;

const EXAMPLES: &str = "\
USAGE EXAMPLES:
  prompt-polish \"Need help sorting a list faster in JS\"
  prompt-polish --prompt \"Need help sorting a list faster in JS\"
  echo \"Need help sorting a list faster in JS\" | prompt-polish
  cat myprompt.txt | prompt-polish -s > polished.md

ENVIRONMENT:
  OPENAI_API_KEY               API key (required)
  OPENAI_BASE_URL              API root [default: https://api.openai.com/v1]
  PROMPT_POLISH_MODEL          Model identifier [default: gpt-4o-mini]
  PROMPT_POLISH_TIMEOUT        Request timeout in seconds [default: 30]
  PROMPT_POLISH_TEMPLATE_FILE  Load the system prompt from this file
  PROMPT_POLISH_CONFIG         Config file path
  PROMPT_POLISH_LOG            Log level (error, warn, info, debug, trace)";

/// Refine a raw software-development prompt into a structured prompt for a coding LLM.
#[derive(Parser, Debug, Default)]
#[command(name = "prompt-polish")]
#[command(author, version, about, long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// The prompt to polish (if not provided, reads from stdin)
    #[arg(value_name = "PROMPT")]
    pub prompt: Option<String>,

    /// The prompt to polish (alternative to the positional argument; takes precedence)
    #[arg(long = "prompt", value_name = "TEXT")]
    pub prompt_flag: Option<String>,

    /// Do not show the progress spinner
    #[arg(short, long)]
    pub silent: bool,
}
