use std::env;
use std::process;
use anyhow::{Result, anyhow, bail};
use deskcalc::lexer;
use deskcalc::{Parser, format_result, render_error};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage() {
    println!("deskcalc-check v{}", VERSION);
    println!("Usage: deskcalc-check [options] <expression>");
    println!("");
    println!("Options:");
    println!("  --lex-only            只进行词法分析并列出记号");
    println!("  --parse-only          进行词法和语法分析（不输出结果）");
    println!("  --version, -v         显示版本号");
    println!("  --help, -h            显示帮助信息");
    println!("");
    println!("Examples:");
    println!("  deskcalc-check \"1+2*3\"");
    println!("  deskcalc-check --lex-only \"(1 + 2)\"");
}

#[derive(Debug, Clone, Copy, Default)]
enum CheckLevel {
    LexOnly,
    ParseOnly,
    #[default]
    Full,
}

#[derive(Debug, Default)]
struct CheckOptions {
    level: CheckLevel,
}

fn parse_args(args: &[String]) -> Result<(CheckOptions, String)> {
    let mut options = CheckOptions::default();
    let mut expression: Option<String> = None;
    let mut i = 1;

    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "--version" | "-v" => {
                println!("deskcalc-check v{}", VERSION);
                process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            "--lex-only" => {
                options.level = CheckLevel::LexOnly;
            }
            "--parse-only" => {
                options.level = CheckLevel::ParseOnly;
            }
            _ => {
                if arg.starts_with("--") {
                    bail!("未知选项: {}", arg);
                }
                if expression.is_none() {
                    expression = Some(arg.clone());
                } else {
                    bail!("多余参数: {}", arg);
                }
            }
        }
        i += 1;
    }

    let expression = expression.ok_or_else(|| anyhow!("需要指定表达式"))?;

    Ok((options, expression))
}

fn print_tokens(source: &str) {
    let lexemes = lexer::lex(source);
    println!("  [+] 词法分析完成");
    println!("      发现 {} 个记号", lexemes.len());
    for lexeme in &lexemes {
        println!(
            "      {:>3}..{:<3} {:<18} {:?}",
            lexeme.span.start,
            lexeme.span.end,
            lexeme.token.describe(),
            lexeme.text(source)
        );
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let (options, source) = match parse_args(&args) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("错误: {}", e);
            print_usage();
            process::exit(1);
        }
    };

    println!("deskcalc-check v{}", VERSION);
    println!("检查表达式: {}", source);
    println!("检查级别: {}", match options.level {
        CheckLevel::LexOnly => "词法分析",
        CheckLevel::ParseOnly => "语法分析",
        CheckLevel::Full => "完整检查（词法+语法+求值）",
    });
    println!("");

    let start_time = std::time::Instant::now();

    println!("[1] 词法分析...");
    print_tokens(&source);

    if let CheckLevel::LexOnly = options.level {
        println!("");
        println!("[+] 检查完成! (耗时: {:?})", start_time.elapsed());
        return;
    }

    println!("");
    println!("[2] 语法分析...");
    match Parser::new(&source).parse() {
        Ok(value) => {
            println!("  [+] 语法分析通过");
            if let CheckLevel::Full = options.level {
                println!("      结果: {}", format_result(value));
            }
            println!("");
            println!("[+] 检查完成! (耗时: {:?})", start_time.elapsed());
        }
        Err(e) => {
            eprintln!("{}", render_error(&e, &source));
            process::exit(1);
        }
    }
}
