use std::process;

use clap::{App, Arg, ArgGroup};
use log::debug;

use sokoban_movegen::config::{Config, Format, HeuristicKind, Method};
use sokoban_movegen::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-movegen")
        .author("martin-t")
        .version("0.1")
        .arg(
            Arg::with_name("custom")
                .short("c")
                .long("custom")
                .help("print in custom format"),
        )
        .arg(
            Arg::with_name("xsb")
                .short("x")
                .long("xsb")
                .help("print in XSB format (default)"),
        )
        .group(ArgGroup::with_name("format").arg("custom").arg("xsb"))
        .arg(
            Arg::with_name("greedy")
                .short("g")
                .long("greedy")
                .help("order states only by the heuristic instead of depth + heuristic"),
        )
        .arg(
            Arg::with_name("heuristic")
                .long("heuristic")
                .takes_value(true)
                .possible_values(&["pushes", "moves"])
                .default_value("pushes")
                .help("estimate remaining pushes or remaining moves"),
        )
        .arg(
            Arg::with_name("steps")
                .short("s")
                .long("steps")
                .help("print the level after every move, not just after pushes"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("don't print search progress and statistics"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let format = if matches.is_present("custom") {
        Format::Custom
    } else {
        Format::Xsb
    };
    let method = if matches.is_present("greedy") {
        Method::Greedy
    } else {
        Method::AStar
    };
    let heuristic = matches
        .value_of("heuristic")
        .unwrap_or("pushes")
        .parse()
        .unwrap_or(HeuristicKind::Pushes);
    let quiet = matches.is_present("quiet");
    let config = Config {
        method,
        heuristic,
        format,
        print_status: !quiet,
    };
    debug!("{:?}", config);

    // required so clap exits before we get here
    let path = matches.value_of("file").unwrap_or_default();

    let level = path.load_level().unwrap_or_else(|err| {
        eprintln!("Can't load level {}: {}", path, err);
        process::exit(1);
    });

    println!("Solving {}...", path);
    let solver_ok = level.solve(&config).unwrap_or_else(|err| {
        eprintln!("Invalid level: {}", err);
        process::exit(1);
    });
    if !quiet {
        println!("{}", solver_ok.stats);
    }

    match solver_ok.moves {
        Some(moves) => {
            println!("Found solution:");
            print!(
                "{}",
                level.format_solution(&moves, matches.is_present("steps"), config.format)
            );
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        None => println!("No solution"),
    }
}
