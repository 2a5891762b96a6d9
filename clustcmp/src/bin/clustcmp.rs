//! This binary compares two clusterizations of the same observations stored in label files.
//!
//! usage : clustcmp --labels1 file1 --labels2 file2 \[--header\] \[--column k\] \[--delimiter c\] \[--comembership\]
//!
//! Each file gives one label per record, in observation order. Logging is driven by RUST_LOG.

use cpu_time::ProcessTime;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use anyhow::anyhow;
use clap::{Arg, ArgAction, ArgMatches, Command};

use clusteval::prelude::*;

use clustcmp::io::*;
use clustcmp::report::*;

// above this number of observations we do not print comembership vectors
const MAX_COMEMBERSHIP_DUMP: usize = 10_000;

//========================================

/// what we got from the command line
struct CmpParams {
    labels1: PathBuf,
    labels2: PathBuf,
    file_params: LabelFileParams,
    comembership: bool,
}

fn parse_cmd(matches: &ArgMatches) -> anyhow::Result<CmpParams> {
    log::debug!("in parse_cmd");
    let labels1 = matches
        .get_one::<PathBuf>("labels1")
        .ok_or_else(|| anyhow!("labels1 is required"))?
        .clone();
    let labels2 = matches
        .get_one::<PathBuf>("labels2")
        .ok_or_else(|| anyhow!("labels2 is required"))?
        .clone();
    let header = matches.get_flag("header");
    let column = *matches.get_one::<usize>("column").unwrap_or(&0);
    let delimiter = *matches.get_one::<char>("delimiter").unwrap_or(&',');
    if !delimiter.is_ascii() {
        return Err(anyhow!("delimiter must be an ascii character"));
    }
    let comembership = matches.get_flag("comembership");
    //
    Ok(CmpParams {
        labels1,
        labels2,
        file_params: LabelFileParams::new(header, column, delimiter as u8),
        comembership,
    })
} // end of parse_cmd

fn dump_comembership(name: &str, labels: &[String]) -> anyhow::Result<()> {
    if labels.len() > MAX_COMEMBERSHIP_DUMP {
        return Err(anyhow!(
            "comembership of {} observations not printed, limit is {}",
            labels.len(),
            MAX_COMEMBERSHIP_DUMP
        ));
    }
    let comembership = par_comembership(labels);
    let as_str: Vec<String> = comembership.iter().map(|c| c.to_string()).collect();
    println!(" comembership {} : {}", name, as_str.join(" "));
    Ok(())
}

//==========================================

fn main() -> anyhow::Result<()> {
    //
    let _ = env_logger::builder().try_init();
    //
    log::info!("running clustcmp");
    //
    let matches = Command::new("clustcmp")
        .arg_required_else_help(true)
        .arg(
            Arg::new("labels1")
                .required(true)
                .long("labels1")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(PathBuf))
                .help("file of labels of first clusterization"),
        )
        .arg(
            Arg::new("labels2")
                .required(true)
                .long("labels2")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(PathBuf))
                .help("file of labels of second clusterization"),
        )
        .arg(
            Arg::new("header")
                .long("header")
                .action(ArgAction::SetTrue)
                .help("skip first record of label files"),
        )
        .arg(
            Arg::new("column")
                .long("column")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(usize))
                .default_value("0")
                .help("rank of field containing labels"),
        )
        .arg(
            Arg::new("delimiter")
                .long("delimiter")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(char))
                .default_value(",")
                .help("field delimiter"),
        )
        .arg(
            Arg::new("comembership")
                .long("comembership")
                .action(ArgAction::SetTrue)
                .help("print comembership vectors"),
        )
        .get_matches();
    //
    let params = parse_cmd(&matches)?;
    //
    let labels1 = read_labels(&params.labels1, &params.file_params)?;
    let labels2 = read_labels(&params.labels2, &params.file_params)?;
    //
    let cpu_start = ProcessTime::now();
    let sys_now = SystemTime::now();
    //
    let report = ComparisonReport::new(&labels1, &labels2)?;
    println!("{}", report);
    if params.comembership {
        dump_comembership("1", &labels1)?;
        dump_comembership("2", &labels2)?;
    }
    //
    let cpu_time: Duration = cpu_start.elapsed();
    println!(
        "  sys time(ms) {:?} cpu time(ms) {:?}",
        sys_now.elapsed()?.as_millis(),
        cpu_time.as_millis()
    );
    Ok(())
} // end of main
