use nice_scale::{NiceScaleOptions, compute_nice_scale};

const USAGE: &str = "usage: nice_scale_probe <min> <max> [--max-ticks <n>] [--min-point <x>] [--max-point <y>] [--json]";

#[derive(Debug)]
struct CliArgs {
    min_point: f64,
    max_point: f64,
    options: NiceScaleOptions,
    json: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = nice_scale::telemetry::init_default_tracing();
    let args = parse_args()?;
    let options = args.options.validate().map_err(|err| err.to_string())?;
    let scale = compute_nice_scale(args.min_point, args.max_point, options);

    if args.json {
        let json = scale
            .to_json_contract_v1_pretty()
            .map_err(|err| err.to_string())?;
        println!("{json}");
        return Ok(());
    }

    println!("nice min:     {}", scale.format_tick(scale.nice_min));
    println!("nice max:     {}", scale.format_tick(scale.nice_max));
    println!("tick spacing: {}", scale.format_tick(scale.tick_spacing));
    println!("ticks:        {}", scale.tick_labels().join(", "));
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut positional = Vec::with_capacity(2);
    let mut options = NiceScaleOptions::new();
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--max-ticks" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --max-ticks".to_owned())?;
                let max_ticks = value
                    .parse::<usize>()
                    .map_err(|err| format!("invalid --max-ticks `{value}`: {err}"))?;
                options = options.with_max_ticks(max_ticks);
            }
            "--min-point" => {
                let value = next_number(&mut args, "--min-point")?;
                options = options.with_min_point(value);
            }
            "--max-point" => {
                let value = next_number(&mut args, "--max-point")?;
                options = options.with_max_point(value);
            }
            "--json" => json = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => positional.push(parse_number(other, "bound")?),
        }
    }

    match positional.as_slice() {
        [min_point, max_point] => Ok(CliArgs {
            min_point: *min_point,
            max_point: *max_point,
            options,
            json,
        }),
        _ => Err(USAGE.to_owned()),
    }
}

fn next_number(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<f64, String> {
    let value = args
        .next()
        .ok_or_else(|| format!("missing value for {flag}"))?;
    parse_number(&value, flag)
}

fn parse_number(value: &str, name: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|err| format!("invalid {name} `{value}`: {err}"))
}
