use std::env;
use std::io::{self, BufRead};
use std::process;
use std::time::Instant;
use anyhow::{Context, Result, bail};
use deskcalc::{Calculator, ERROR_MARKER, apply_percent, format_result, parse, render_error, toggle_sign};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage() {
    println!("deskcalc v{}", VERSION);
    println!("Usage: deskcalc [options] [expression]");
    println!("");
    println!("Options:");
    println!("  --percent             对表达式求值并乘以 100");
    println!("  --toggle-sign         切换末尾数字的正负号");
    println!("  --keys                把参数当作按键序列输入计算器");
    println!("  --verbose             在 stderr 输出模式与耗时");
    println!("  --version, -v         显示版本号");
    println!("  --help, -h            显示帮助信息");
    println!("");
    println!("未给出表达式时从标准输入逐行读取。");
    println!("");
    println!("Examples:");
    println!("  deskcalc \"(2+3)*4\"");
    println!("  deskcalc --percent 0.5");
    println!("  deskcalc --keys \"12+3=\"");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    Evaluate,
    Percent,
    ToggleSign,
    Keys,
}

impl Mode {
    fn describe(self) -> &'static str {
        match self {
            Mode::Evaluate => "求值",
            Mode::Percent => "百分比",
            Mode::ToggleSign => "正负号切换",
            Mode::Keys => "按键序列",
        }
    }
}

#[derive(Debug, Default)]
struct CalcOptions {
    mode: Mode,
    verbose: bool,
}

fn parse_args(args: &[String]) -> Result<(CalcOptions, Option<String>)> {
    let mut options = CalcOptions::default();
    let mut expression: Option<String> = None;
    let mut i = 1;

    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "--version" | "-v" => {
                println!("deskcalc v{}", VERSION);
                process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            "--percent" => options.mode = Mode::Percent,
            "--toggle-sign" => options.mode = Mode::ToggleSign,
            "--keys" => options.mode = Mode::Keys,
            "--verbose" => options.verbose = true,
            // 之后的参数都是表达式
            "--" => {
                i += 1;
                if i < args.len() {
                    expression = Some(args[i].clone());
                }
                i += 1;
                if i < args.len() {
                    bail!("多余参数: {}", args[i]);
                }
                break;
            }
            _ => {
                if arg.starts_with("--") {
                    bail!("未知选项: {}", arg);
                }
                if expression.is_some() {
                    bail!("多余参数: {}", arg);
                }
                expression = Some(arg.clone());
            }
        }
        i += 1;
    }

    Ok((options, expression))
}

/// 处理一个输入，返回是否成功
fn run_once(options: &CalcOptions, calculator: &mut Calculator, input: &str) -> bool {
    match options.mode {
        Mode::Evaluate => match parse(input) {
            Ok(value) => {
                println!("{}", format_result(value));
                true
            }
            Err(e) => {
                eprintln!("{}", render_error(&e, input));
                false
            }
        },
        Mode::Percent => {
            let result = apply_percent(input);
            println!("{}", result);
            result != ERROR_MARKER
        }
        Mode::ToggleSign => {
            println!("{}", toggle_sign(input));
            true
        }
        Mode::Keys => {
            calculator.apply_keys(input);
            println!("{}", calculator.display());
            match calculator.last_error() {
                Some(e) => {
                    eprintln!("error: {}", e);
                    false
                }
                None => true,
            }
        }
    }
}

fn run_lines(options: &CalcOptions) -> Result<bool> {
    let stdin = io::stdin();
    // 按键模式下各行共享同一个计算器
    let mut calculator = Calculator::new();
    let mut all_ok = true;

    for line in stdin.lock().lines() {
        let line = line.context("读取标准输入失败")?;
        if line.is_empty() {
            continue;
        }
        all_ok &= run_once(options, &mut calculator, &line);
    }

    Ok(all_ok)
}

fn run(options: &CalcOptions, expression: Option<&str>) -> Result<bool> {
    let start_time = Instant::now();
    if options.verbose {
        eprintln!("模式: {}", options.mode.describe());
    }

    let ok = match expression {
        Some(input) => run_once(options, &mut Calculator::new(), input),
        None => run_lines(options)?,
    };

    if options.verbose {
        eprintln!("[+] 完成 (耗时: {:?})", start_time.elapsed());
    }
    Ok(ok)
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let (options, expression) = match parse_args(&args) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("错误: {}", e);
            print_usage();
            process::exit(1);
        }
    };

    match run(&options, expression.as_deref()) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("错误: {:#}", e);
            process::exit(1);
        }
    }
}
