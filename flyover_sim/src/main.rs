//! Flyover Simulator CLI
//!
//! Flies a virtual camera over synthetic terrain with a deterministic
//! frame clock and reports what the run produced.

use clap::{Parser, ValueEnum};
use flyover_core::animation::PATH_SOURCE;
use flyover_core::{animate_path, AnimationParams, CancelToken, FlightPath, ProgressSink};
use flyover_env::LngLat;
use flyover_sim::{loop_route, straight_route, FakeMap, SimFrameClock, TerrainModel};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RouteKind {
    /// Straight chain of waypoints along the start bearing
    Straight,
    /// Closed loop around the start coordinate
    Loop,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TerrainKind {
    /// Uniform elevation
    Flat,
    /// Constant 10% grade northward
    Ramp,
    /// Alternating sinusoidal ridges
    Ridge,
    /// A coverage hole across the middle of the route
    Patchy,
}

#[derive(Parser, Debug)]
#[command(name = "flyover-sim")]
#[command(about = "Run a deterministic camera flyover over synthetic terrain", long_about = None)]
struct Args {
    /// Master seed for determinism (0 = random from time)
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Animation duration in seconds
    #[arg(short, long, default_value = "20")]
    duration: f64,

    /// Simulated frames per second
    #[arg(long, default_value = "60")]
    fps: u32,

    /// Maximum per-frame scheduling jitter in milliseconds
    #[arg(long, default_value = "0")]
    jitter_ms: u64,

    /// Camera bearing in degrees (0 = north)
    #[arg(short, long, default_value = "0")]
    bearing: f64,

    /// Camera altitude above ground in meters
    #[arg(short, long, default_value = "500")]
    altitude: f64,

    /// Camera pitch in degrees
    #[arg(short, long, default_value = "60")]
    pitch: f64,

    /// Route shape to fly
    #[arg(long, value_enum, default_value_t = RouteKind::Straight)]
    route: RouteKind,

    /// Number of route waypoints
    #[arg(long, default_value = "120")]
    waypoints: usize,

    /// Waypoint spacing in meters (straight) or loop radius (loop)
    #[arg(long, default_value = "50")]
    spacing: f64,

    /// Terrain model under the route
    #[arg(long, value_enum, default_value_t = TerrainKind::Ridge)]
    terrain: TerrainKind,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Tracks readouts the way a UI would display them.
#[derive(Default)]
struct Readouts {
    last_distance_m: f64,
    min_elevation_m: Option<i32>,
    max_elevation_m: Option<i32>,
}

impl ProgressSink for Readouts {
    fn on_distance(&mut self, meters: f64) {
        self.last_distance_m = meters;
    }

    fn on_elevation(&mut self, meters: i32) {
        self.min_elevation_m = Some(self.min_elevation_m.map_or(meters, |m| m.min(meters)));
        self.max_elevation_m = Some(self.max_elevation_m.map_or(meters, |m| m.max(meters)));
    }
}

const START: LngLat = LngLat {
    lng: 7.75,
    lat: 45.98,
};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let seed = if args.seed == 0 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64
    } else {
        args.seed
    };

    let coords = match args.route {
        RouteKind::Straight => straight_route(START, args.bearing, args.waypoints, args.spacing),
        RouteKind::Loop => loop_route(START, args.spacing, args.waypoints),
    };
    let path = match FlightPath::new(coords) {
        Ok(path) => path,
        Err(err) => {
            error!(%err, "route construction failed");
            std::process::exit(1);
        }
    };

    let terrain = match args.terrain {
        TerrainKind::Flat => TerrainModel::Flat { elevation_m: 1500.0 },
        TerrainKind::Ramp => TerrainModel::Ramp {
            base_m: 1000.0,
            origin_lat: START.lat,
            grade: 0.1,
        },
        TerrainKind::Ridge => TerrainModel::Ridge {
            base_m: 1500.0,
            amplitude_m: 300.0,
            wavelength_deg: 0.02,
        },
        TerrainKind::Patchy => TerrainModel::Patchy {
            elevation_m: 1200.0,
            hole_lat_min: START.lat + 0.005,
            hole_lat_max: START.lat + 0.010,
        },
    };

    let clock = SimFrameClock::new(seed)
        .with_interval(Duration::from_secs(1) / args.fps)
        .with_jitter(Duration::from_millis(args.jitter_ms));
    let mut map = FakeMap::new(terrain);
    let mut readouts = Readouts::default();

    let params = AnimationParams {
        duration: Duration::from_secs_f64(args.duration),
        start_bearing: args.bearing,
        start_altitude: args.altitude,
        pitch: args.pitch,
    };

    info!(
        "starting flyover: seed={} route_total={:.0}m frames@{}fps",
        seed,
        path.total_length(),
        args.fps
    );

    let report = match animate_path(
        &clock,
        &mut map,
        &path,
        &params,
        &mut readouts,
        &CancelToken::new(),
    )
    .await
    {
        Ok(report) => report,
        Err(err) => {
            error!(%err, "animation failed");
            std::process::exit(1);
        }
    };

    info!(
        "flyover finished: {} frames, {:.1} m traveled{}",
        report.frames,
        report.distance_m,
        if report.cancelled { " (cancelled)" } else { "" }
    );
    info!("last readout distance: {:.1} m", readouts.last_distance_m);
    if let (Some(min), Some(max)) = (readouts.min_elevation_m, readouts.max_elevation_m) {
        info!("elevation range: {} m .. {} m", min, max);
    }

    // Slope color histogram from the final traveled-path geometry.
    if let Some(colors) = map.line_colors(PATH_SOURCE) {
        let mut histogram: BTreeMap<String, usize> = BTreeMap::new();
        for color in colors {
            *histogram.entry(color).or_default() += 1;
        }
        for (color, count) in histogram {
            info!("  {} x{}", color, count);
        }
    }
}
