use clap::Parser;
use statpy::errors::StatpyResult;
use statpy::{read_tree, NodeCount, NodeCounter, PrettyPrinter, Statement};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Render a statpy syntax tree as an indented construction trace",
    long_about = "Render a statpy syntax tree as an indented construction trace.\n\
                 The tree is read from the JSON document produced by the parser\n\
                 and printed one line per node.\n\
                 \n\
                 Example usage:\n\
                 statpy tree.json                  # Print trace to stdout\n\
                 statpy tree.json -o tree.txt      # Write trace to a file\n\
                 statpy tree.json --verbose        # Report each phase\n\
                 statpy tree.json --timing         # Show timing and node statistics"
)]
struct Cli {
    // The tree document to render
    path: PathBuf,

    // Output file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show timing and node statistics
    #[arg(short, long)]
    timing: bool,
}

// Render statistics for the --timing table
#[derive(Debug, Default)]
struct RenderStats {
    load_time: f64,
    count_time: f64,
    render_time: f64,
    total_time: f64,
    nodes: NodeCount,
    output_lines: usize,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn loading_phase(path: &Path, stats: &mut RenderStats, verbose: bool) -> StatpyResult<Statement> {
    let start = Instant::now();
    let tree = read_tree(path)?;
    stats.load_time = start.elapsed().as_secs_f64();

    if verbose {
        eprintln!("Loaded tree from {} in {:.3}s", path.display(), stats.load_time);
    }

    Ok(tree)
}

fn counting_phase(tree: &Statement, stats: &mut RenderStats, verbose: bool) -> StatpyResult<()> {
    let start = Instant::now();
    stats.nodes = NodeCounter::count(tree)?;
    stats.count_time = start.elapsed().as_secs_f64();

    if verbose {
        eprintln!("Counted {} nodes in {:.3}s", stats.nodes.total(), stats.count_time);
    }

    Ok(())
}

// Passes bytes through and counts the lines that went by
struct LineCounter<W: Write> {
    inner: W,
    lines: usize,
}

impl<W: Write> LineCounter<W> {
    fn new(inner: W) -> Self {
        Self { inner, lines: 0 }
    }
}

impl<W: Write> Write for LineCounter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.lines += buf[..written].iter().filter(|&&b| b == b'\n').count();
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

fn open_sink(output: Option<&Path>) -> StatpyResult<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    })
}

// Lines reach the sink as they are rendered, so a failure part way
// leaves everything before it in place.
fn rendering_phase(
    tree: &Statement,
    sink: Box<dyn Write>,
    stats: &mut RenderStats,
    verbose: bool,
) -> StatpyResult<()> {
    let start = Instant::now();
    let mut printer = PrettyPrinter::new(LineCounter::new(BufWriter::new(sink)));
    let rendered = printer.print(tree);
    let mut out = printer.into_inner();
    let flushed = out.flush();
    stats.render_time = start.elapsed().as_secs_f64();
    stats.output_lines = out.lines;

    rendered?;
    flushed?;

    if verbose {
        eprintln!("Rendered {} lines in {:.3}s", stats.output_lines, stats.render_time);
    }

    Ok(())
}

fn run(args: &Cli) -> StatpyResult<RenderStats> {
    let start = Instant::now();
    let mut stats = RenderStats::default();

    let tree = loading_phase(&args.path, &mut stats, args.verbose)?;
    let sink = open_sink(args.output.as_deref())?;
    rendering_phase(&tree, sink, &mut stats, args.verbose)?;
    if args.verbose {
        if let Some(path) = &args.output {
            eprintln!("Trace written to: {}", path.display());
        }
    }
    if args.timing {
        counting_phase(&tree, &mut stats, args.verbose)?;
    }

    stats.total_time = start.elapsed().as_secs_f64();
    Ok(stats)
}

fn print_stats(stats: &RenderStats) {
    eprintln!("\n Render Statistics:");
    eprintln!("+---------------------+-----------+");
    eprintln!("| Phase               | Time (s)  |");
    eprintln!("+---------------------+-----------+");
    eprintln!("| Loading             | {:>9.3} |", stats.load_time);
    eprintln!("| Counting            | {:>9.3} |", stats.count_time);
    eprintln!("| Rendering           | {:>9.3} |", stats.render_time);
    eprintln!("+---------------------+-----------+");
    eprintln!("| Total Time          | {:>9.3} |", stats.total_time);
    eprintln!("+---------------------+-----------+");

    eprintln!("\n Tree Metrics:");
    eprintln!("  - Expressions:        {}", stats.nodes.expressions);
    eprintln!("  - Statements:         {}", stats.nodes.statements);
    eprintln!("  - Declarations:       {}", stats.nodes.declarations);
    eprintln!("  - Max Depth:          {}", stats.nodes.max_depth);
    eprintln!("  - Output Lines:       {}", stats.output_lines);
}

fn main() {
    let args = Cli::parse();

    match run(&args) {
        Ok(stats) => {
            if args.timing {
                print_stats(&stats);
            }
            if args.verbose {
                eprintln!("Render successful!");
            }
        }
        Err(e) => fatal(&format!("Render failed: {}", e)),
    }
}
