//! The CLI driver.  An embedding build script populates a Graph in its
//! `main`, then hands control here; the returned code goes to
//! `std::process::exit`.

use crate::graph::Graph;
use crate::progress::Console;
use crate::work::Work;

/// Parse the process arguments and refresh the requested targets, or
/// `default` if none were given.
pub fn run(graph: &Graph, default: Option<&str>) -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();
    run_with_args(graph, default, &args)
}

pub fn run_with_args(graph: &Graph, default: Option<&str>, args: &[String]) -> i32 {
    match run_impl(graph, default, args) {
        Ok(code) => code,
        Err(err) => {
            Console::new(false).error(&err.to_string());
            1
        }
    }
}

fn run_impl(graph: &Graph, default: Option<&str>, args: &[String]) -> anyhow::Result<i32> {
    let mut opts = getopts::Options::new();
    opts.optflag("h", "help", "");
    opts.optflag("l", "list", "list all registered targets");
    opts.optopt("d", "debug", "debugging tools", "TOOL");
    let matches = opts.parse(args)?;
    if matches.opt_present("h") {
        println!("{}", opts.usage("usage: rmk [options] [targets]"));
        return Ok(0);
    }

    if matches.opt_present("l") {
        for name in graph.targets() {
            println!("{}", name);
        }
        return Ok(0);
    }

    let mut explain = false;
    if let Some(debug) = matches.opt_str("d") {
        match debug.as_str() {
            "list" => {
                println!("debug tools:");
                println!("  explain  log why each target is or isn't rebuilt");
                return Ok(0);
            }
            "explain" => explain = true,
            _ => anyhow::bail!("unknown -d {:?}, use -d list to list", debug),
        }
    }

    let targets: Vec<&str> = if !matches.free.is_empty() {
        matches.free.iter().map(|s| s.as_str()).collect()
    } else {
        default.into_iter().collect()
    };
    if targets.is_empty() {
        // No targets requested and the embedder configured no default.
        return Ok(0);
    }

    let console = Console::new(explain);
    let mut work = Work::new(graph, &console);
    for target in targets {
        if let Err(err) = work.refresh(target) {
            console.error(&err.to_string());
            return Ok(1);
        }
    }

    if work.ran == 0 {
        println!("rmk: no work to do");
    } else {
        println!("rmk: ran {} steps, now up to date", work.ran);
    }
    Ok(0)
}
