use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 20)]
    pub rows: usize,

    #[arg(long, default_value_t = 20)]
    pub cols: usize,

    /// bfs, dfs, ucs, dls, iddfs, bidirectional, or all
    #[arg(long, default_value = "bfs")]
    pub algorithm: String,

    /// random, best, or worst
    #[arg(long, default_value = "random")]
    pub scenario: String,

    #[arg(long, default_value_t = 0.23)]
    pub static_wall_prob: f64,

    #[arg(long, default_value_t = 0.02)]
    pub dynamic_wall_prob: f64,

    /// Depth cutoff for dls
    #[arg(long, default_value_t = 40)]
    pub depth_limit: usize,

    /// Deepest iteration for iddfs
    #[arg(long, default_value_t = 50)]
    pub max_depth: usize,

    #[arg(long, default_value_t = 55)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    /// Fixed seed for reproducible grids and wall injection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Request cancellation after this many observed steps
    #[arg(long)]
    pub step_budget: Option<usize>,
}
