use std::error::Error;
use std::fmt::Display;
use std::io;
use std::process;
use std::str::FromStr;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;

use puzzle_solver::clock::ClockConfig;
use puzzle_solver::config::Puzzle;
use puzzle_solver::configuration::Configuration;
use puzzle_solver::game::{Game, Playable};
use puzzle_solver::ptui;
use puzzle_solver::tilt::TiltConfig;
use puzzle_solver::tipover::TipOverConfig;
use puzzle_solver::water::WaterConfig;
use puzzle_solver::{LoadBoard, Solve};

const PLAY: &str = "play";

fn main() {
    env_logger::init();

    let file_arg = Arg::with_name("file")
        .required(true)
        .help("board file");

    let matches = App::new("puzzle-solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves small puzzles by breadth-first search")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("stats")
                .long("stats")
                .global(true)
                .help("print the number of created and unique states at each depth"),
        ).arg(
            Arg::with_name("status")
                .long("status")
                .global(true)
                .help("print progress while searching"),
        ).subcommand(
            SubCommand::with_name(Puzzle::Clock.name())
                .about("turn a clock hand from one hour to another")
                .arg(Arg::with_name("hours").required(true))
                .arg(Arg::with_name("start").required(true))
                .arg(Arg::with_name("end").required(true)),
        ).subcommand(
            SubCommand::with_name(Puzzle::Water.name())
                .about("measure an amount of water using buckets")
                .arg(Arg::with_name("amount").required(true))
                .arg(
                    Arg::with_name("capacities")
                        .required(true)
                        .multiple(true)
                        .help("bucket capacities"),
                ),
        ).subcommand(
            SubCommand::with_name(Puzzle::Tilt.name())
                .about("tilt a board until all green sliders fall into holes")
                .arg(file_arg.clone()),
        ).subcommand(
            SubCommand::with_name(Puzzle::TipOver.name())
                .about("move the tipper to the goal by stepping on and tipping over towers")
                .arg(file_arg.clone()),
        ).subcommand(
            SubCommand::with_name(PLAY)
                .about("play tip-over (or tilt) interactively")
                .arg(
                    Arg::with_name("tilt")
                        .long("tilt")
                        .help("the file is a tilt board"),
                ).arg(file_arg),
        ).get_matches();

    let (name, sub) = match matches.subcommand() {
        (name, Some(sub)) => (name, sub),
        _ => unreachable!("clap requires a subcommand"),
    };
    let print_stats = matches.is_present("stats") || sub.is_present("stats");
    let print_status = matches.is_present("status") || sub.is_present("status");

    if name == PLAY {
        let path = value(sub, "file");
        if sub.is_present("tilt") {
            play::<TiltConfig>(path);
        } else {
            play::<TipOverConfig>(path);
        }
        return;
    }

    let puzzle =
        Puzzle::from_name(name).unwrap_or_else(|| unreachable!("unknown subcommand {}", name));
    info!("Solving {} puzzle", puzzle);
    match puzzle {
        Puzzle::Clock => {
            let hours = parse_num(sub, "hours");
            let start = parse_num(sub, "start");
            let end = parse_num(sub, "end");
            let clock = ClockConfig::new(hours, start, end).unwrap_or_else(|err| fail(err));
            println!("Hours: {}, Start: {}, End: {}", hours, start, end);
            solve(&clock, false, print_stats, print_status);
        }
        Puzzle::Water => {
            let amount = parse_num(sub, "amount");
            let capacities: Vec<u32> = sub
                .values_of("capacities")
                .into_iter()
                .flatten()
                .map(parse)
                .collect();
            println!("Amount: {}, Buckets: {:?}", amount, capacities);
            let water = WaterConfig::new(amount, capacities).unwrap_or_else(|err| fail(err));
            solve(&water, false, print_stats, print_status);
        }
        Puzzle::Tilt => {
            let path = value(sub, "file");
            let board: TiltConfig = load(path);
            println!("File: {}", path);
            println!("{}", board);
            solve(&board, true, print_stats, print_status);
        }
        Puzzle::TipOver => {
            let path = value(sub, "file");
            let board: TipOverConfig = load(path);
            println!("File: {}", path);
            println!("{}", board);
            solve(&board, true, print_stats, print_status);
        }
    }
}

fn solve<C>(initial: &C, multiline: bool, print_stats: bool, print_status: bool)
where
    C: Configuration + Display,
{
    let solution = initial.solve(print_status);
    info!("Search finished: {:?}", solution.move_cnt());

    if solution.path.is_empty() {
        println!("No solution");
    } else {
        print!("{}", solution.stats);
        for (i, state) in solution.path.iter().enumerate() {
            if multiline {
                println!("Step {}:", i);
                println!("{}", state);
            } else {
                println!("Step {}: {}", i, state);
            }
        }
    }

    if print_stats {
        solution.stats.depth_table().printstd();
    }
}

fn play<B: Playable>(path: &str) {
    let mut game = Game::<B>::load(path).unwrap_or_else(|err| {
        println!("Failed to load {}: {}", path, err);
        process::exit(1);
    });

    let stdin = io::stdin();
    let stdout = io::stdout();
    ptui::run(&mut game, stdin.lock(), &mut stdout.lock()).unwrap_or_else(|err| fail(err));
}

fn value<'a>(matches: &'a ArgMatches<'_>, name: &str) -> &'a str {
    // only used for required args
    matches.value_of(name).unwrap_or_default()
}

fn parse_num(matches: &ArgMatches<'_>, name: &str) -> u32 {
    parse(value(matches, name))
}

fn parse<T: FromStr>(text: &str) -> T {
    text.parse().unwrap_or_else(|_| {
        println!("Not a valid number: {}", text);
        process::exit(1);
    })
}

fn load<B>(path: &str) -> B
where
    B: FromStr,
    B::Err: Error + 'static,
{
    path.load_board().unwrap_or_else(|err| {
        println!("Failed to load {}: {}", path, err);
        process::exit(1);
    })
}

fn fail<E: Display>(err: E) -> ! {
    println!("{}", err);
    process::exit(1);
}
