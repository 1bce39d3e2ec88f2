use anyhow::Result;
use argh::FromArgs;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use probviz::binomial::Binomial;
use probviz::clt::{self, CltExperiment};
use probviz::console;
use probviz::interactive::{self, CltSession};
use probviz::render::{self, BinomialFigure, CltGridFigure, Locale, RenderConfig, SessionFigure};
use probviz::stats::UniformPopulation;
use std::io::{stdin, stdout};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(FromArgs)]
/// PROBVIZ draws elementary probability distributions and the Central Limit Theorem.
struct Config {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Binomial(BinomialArgs),
    Clt(CltArgs),
    Interactive(InteractiveArgs),
}

#[derive(FromArgs)]
#[argh(subcommand, name = "binomial")]
/// plot the probability mass function of a binomial distribution
struct BinomialArgs {
    #[argh(option, short = 'n', default = "default_trials()")]
    /// number of trials
    n: u64,

    #[argh(option, short = 'p', default = "default_probability()")]
    /// success probability of each trial
    p: f64,

    #[argh(option, short = 'o', default = "PathBuf::from(\"binomial.png\")")]
    /// path of the output image (.png or .svg)
    output: PathBuf,

    #[argh(option, default = "Locale::English")]
    /// language of the labels: en or zh
    lang: Locale,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "clt")]
/// plot the distribution of sample means for several sample sizes
struct CltArgs {
    #[argh(option, default = "SampleSizes(clt::default_sample_sizes())")]
    /// comma separated list of sample sizes
    sizes: SampleSizes,

    #[argh(option, short = 'e', default = "clt::default_experiments()")]
    /// number of experiments per sample size
    experiments: usize,

    #[argh(option, default = "clt::default_seed()")]
    /// seed for the pseudorandom number generator
    seed: u64,

    #[argh(option, default = "0.0")]
    /// lower bound of the uniform population
    lower: f64,

    #[argh(option, default = "1.0")]
    /// upper bound of the uniform population
    upper: f64,

    #[argh(option, short = 'o', default = "PathBuf::from(\"clt_demonstration.png\")")]
    /// path of the output image (.png or .svg)
    output: PathBuf,

    #[argh(option, default = "Locale::English")]
    /// language of the labels: en or zh
    lang: Locale,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "interactive")]
/// accumulate sample means from console commands, redrawing after each one
struct InteractiveArgs {
    #[argh(option, short = 'n', default = "interactive::default_sample_size()")]
    /// initial sample size, between 1 and 100
    sample_size: usize,

    #[argh(option, default = "interactive::default_samples_per_click()")]
    /// sample means taken by the `sample` command
    per_click: usize,

    #[argh(option)]
    /// seed for the pseudorandom number generator, random if omitted
    seed: Option<u64>,

    #[argh(option, default = "0.0")]
    /// lower bound of the uniform population
    lower: f64,

    #[argh(option, default = "1.0")]
    /// upper bound of the uniform population
    upper: f64,

    #[argh(option, short = 'o', default = "PathBuf::from(\"clt_interactive.png\")")]
    /// path of the image redrawn after every command (.png or .svg)
    output: PathBuf,

    #[argh(option, default = "Locale::English")]
    /// language of the labels: en or zh
    lang: Locale,
}

struct SampleSizes(Vec<usize>);

impl FromStr for SampleSizes {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(|tok| {
                tok.trim()
                    .parse::<usize>()
                    .map_err(|e| format!("bad sample size `{}`: {}", tok, e))
            })
            .collect::<Result<Vec<usize>, String>>()
            .map(SampleSizes)
    }
}

fn default_trials() -> u64 {
    1000
}

fn default_probability() -> f64 {
    0.5
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config: Config = argh::from_env();
    match config.command {
        Command::Binomial(args) => run_binomial(args),
        Command::Clt(args) => run_clt(args),
        Command::Interactive(args) => run_interactive(args),
    }
}

fn run_binomial(args: BinomialArgs) -> Result<()> {
    let binomial = Binomial::new(args.n, args.p)?;
    let table = binomial.pmf_table();
    let mode = binomial.mode();
    println!(
        "Binomial(n={}, p={}): mean {:.4}, variance {:.4}, mode {} with P(X={}) = {:.6}",
        binomial.n(),
        binomial.p(),
        binomial.mean(),
        binomial.variance(),
        mode,
        mode,
        table[mode as usize].1
    );

    let render_config = RenderConfig::for_locale(args.lang);
    let figure = BinomialFigure {
        binomial: &binomial,
        table: &table,
    };
    render::save(&figure, &args.output, &render_config)?;
    info!("Wrote {:?}", args.output);
    Ok(())
}

fn run_clt(args: CltArgs) -> Result<()> {
    let experiment = CltExperiment {
        sample_sizes: args.sizes.0,
        experiments: args.experiments,
        seed: args.seed,
        population: UniformPopulation::new(args.lower, args.upper)?,
    };
    experiment.validate()?;

    let pbar = ProgressBar::new(experiment.total_experiments());
    pbar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {msg} {bar:40.cyan/blue} {pos:>7}/{len:7}")?,
    );
    let panels = experiment.run(&pbar)?;

    let render_config = RenderConfig::for_locale(args.lang);
    let figure = CltGridFigure {
        panels: &panels,
        experiments: experiment.experiments,
        bounds: experiment.population.bounds(),
    };
    render::save(&figure, &args.output, &render_config)?;
    info!("Wrote {:?}", args.output);

    println!("{:>6} {:>12} {:>12} {:>12} {:>12}", "n", "mean", "theo. mean", "std", "theo. std");
    for panel in &panels {
        println!(
            "{:>6} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
            panel.sample_size,
            panel.observed.mean,
            panel.theoretical.mean(),
            panel.observed.std_dev,
            panel.theoretical.std_dev()
        );
    }
    let population = &experiment.population;
    let (a, b) = population.bounds();
    println!();
    println!("Whatever the distribution of the population, the distribution of the");
    println!("sample mean approaches a normal distribution as the sample size grows.");
    println!(
        "For U({}, {}): population mean {:.4}, population std {:.4}, so the mean",
        a,
        b,
        population.mean(),
        population.std_dev()
    );
    println!(
        "of n draws is approximately N({:.4}, {:.4}²/n).",
        population.mean(),
        population.std_dev()
    );
    Ok(())
}

fn run_interactive(args: InteractiveArgs) -> Result<()> {
    if !console::SLIDER_RANGE.contains(&args.sample_size) {
        anyhow::bail!(
            "sample size must be between {} and {}, got {}",
            console::SLIDER_RANGE.start(),
            console::SLIDER_RANGE.end(),
            args.sample_size
        );
    }
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Interactive session with seed {}", seed);
    let population = UniformPopulation::new(args.lower, args.upper)?;
    let bounds = population.bounds();
    let mut session = CltSession::new(population, args.sample_size, args.per_click, seed)?;

    let render_config = RenderConfig::for_locale(args.lang);
    let output = args.output;
    println!("The figure is redrawn to {:?} after every command.", output);
    console::run(&mut session, stdin().lock(), stdout(), |view| {
        render::save(&SessionFigure { view, bounds }, &output, &render_config)
    })
}
