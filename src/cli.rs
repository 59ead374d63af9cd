// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, bail};
use rand::{SeedableRng, rngs::StdRng};

use crate::bars::{BarSelector, GeoPoint, projection};
use crate::config::consts::{
    API_KEY_FILE, DEFAULT_CITY, DEFAULT_DATA_FILE, DEFAULT_GOOGLE_DOMAIN, DEFAULT_NUM_RESULTS,
    DEFAULT_QUERY, DEFAULT_SCRAPE_DIR, DEFAULT_ZOOM,
};
use crate::config::options::{AppOptions, ExportFormat, GeocoderOptions, SearchOptions};
use crate::geocode::NominatimGeocoder;
use crate::progress::StderrProgress;
use crate::scrape::{self, SerpApiClient};

/// Pick a bar near you, or refresh the bar list.
#[derive(Parser, Debug)]
#[command(name = "barselector", version)]
pub struct Cli {
    /// Bars table with a header row; tab-separated when named *.tsv
    #[arg(long, global = true, env = "BARSELECTOR_DATA", default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every tag in the dataset, first-seen order
    Tags,
    /// Print the bars that pass the filters
    Filter {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long, value_enum, default_value_t = Format::Tsv)]
        format: Format,
        /// Print a header row first
        #[arg(long)]
        headers: bool,
    },
    /// Pick one bar at random from the filtered list
    Random {
        #[command(flatten)]
        filters: FilterArgs,
        /// Fixed seed for a repeatable pick
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show every stored field of one bar
    Show {
        /// Exact title
        title: String,
    },
    /// Run the places search and write a fresh bars table
    Scrape(ScrapeArgs),
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Reference address, geocoded with Nominatim
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub address: Option<String>,
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,
    /// Keep bars strictly closer than this many km
    #[arg(long)]
    pub max_km: Option<f64>,
    /// Tag to look for; repeat for several (any one matches)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// City the search is centred on
    #[arg(long, default_value = DEFAULT_CITY)]
    pub city: String,
    #[arg(long, default_value = DEFAULT_QUERY)]
    pub query: String,
    /// Cap on results; fetched 20 per page
    #[arg(long, default_value_t = DEFAULT_NUM_RESULTS)]
    pub num_results: usize,
    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: u32,
    #[arg(long, default_value = DEFAULT_GOOGLE_DOMAIN)]
    pub domain: String,
    #[arg(long, default_value = DEFAULT_SCRAPE_DIR)]
    pub out_dir: PathBuf,
    #[arg(long, default_value = API_KEY_FILE)]
    pub api_key_file: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Tags => {
            let sel = open(&cli.data)?;
            for tag in sel.tags() {
                println!("{tag}");
            }
        }
        Command::Filter { filters, format, headers } => {
            let sel = selector_with(&cli.data, &filters)?;
            let kept = sel.filtered();
            let with_distance = sel.reference().is_some();
            let (h, rows) = projection::table(&kept, with_distance);
            let delim = ExportFormat::from(format).delim();
            print!("{}", crate::csv::rows_to_string(headers.then_some(h.as_slice()), &rows, delim));
            logf!("CLI: filter kept {} of {}", kept.len(), sel.dataset().len());
        }
        Command::Random { filters, seed } => {
            let sel = selector_with(&cli.data, &filters)?;
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            let bar = sel.pick_random(&mut rng)?;
            println!("{}", bar.title);
            if let Some(site) = bar.website.as_deref() {
                println!("{site}");
            }
        }
        Command::Show { title } => {
            let sel = open(&cli.data)?;
            for (k, v) in sel.entry(&title)?.details() {
                println!("{k}: {v}");
            }
        }
        Command::Scrape(args) => scrape_cmd(args)?,
    }
    Ok(())
}

fn open(data: &Path) -> Result<BarSelector> {
    let opts = AppOptions { data_path: data.to_path_buf(), ..AppOptions::default() };
    Ok(BarSelector::from_options(&opts)?)
}

fn selector_with(data: &Path, f: &FilterArgs) -> Result<BarSelector> {
    let mut sel = open(data)?;

    if let Some(addr) = f.address.as_deref() {
        sel.set_reference_address(addr)?;
    } else if let (Some(lat), Some(lon)) = (f.lat, f.lon) {
        let p = GeoPoint::new(lat, lon);
        if !p.is_valid() {
            bail!("coordinates out of range: {lat}, {lon}");
        }
        sel.set_reference_point(p)?;
    }

    if f.max_km.is_some() && sel.reference().is_none() {
        bail!("--max-km needs --address or --lat/--lon");
    }
    if let Some(km) = f.max_km {
        if !(km.is_finite() && km >= 0.0) {
            bail!("--max-km must be a non-negative number");
        }
    }

    sel.set_distance_threshold(f.max_km);
    sel.set_required_tags(f.tags.iter().cloned());
    Ok(sel)
}

fn scrape_cmd(args: ScrapeArgs) -> Result<()> {
    let opts = SearchOptions {
        city: args.city,
        query: args.query,
        google_domain: args.domain,
        zoom: args.zoom,
        num_results: args.num_results,
        out_root: args.out_dir,
    };
    let key = scrape::load_api_key(&args.api_key_file)?;
    let geocoder = NominatimGeocoder::new(&GeocoderOptions::default())?;
    let provider = SerpApiClient::new()?;
    let mut progress = StderrProgress::new();

    let summary = scrape::run(&opts, &key, &geocoder, &provider, Some(&mut progress))?;
    println!(
        "Wrote {} ({} bars from {} page(s))",
        summary.csv_path.display(),
        summary.bars,
        summary.pages
    );
    Ok(())
}
