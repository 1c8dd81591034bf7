use combin_math::{binomial_expansion, factorial, is_prime, n_choose_k};
use std::io::{self, Write};

const USAGE: &str = "Commands:
  factorial <n>       n!
  choose <n> <k>      binomial coefficient C(n, k)
  expand <a> <b> <n>  (a + b)^n via the binomial theorem
  prime <n>           primality test
  quit                exit";

fn main() {
    println!("Combinatorics Demo");
    println!("{}", USAGE);

    loop {
        print!("> ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).unwrap() == 0 {
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        match eval(input) {
            Ok(result) => println!("Result: {}", result),
            Err(e) => println!("Error: {}", e),
        }
    }
}

/// Evaluate one command line against the combinatorics functions.
fn eval(line: &str) -> Result<String, String> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().unwrap_or_default();
    let args: Vec<&str> = tokens.collect();

    match (command, args.as_slice()) {
        ("factorial", [n]) => {
            let n = parse_number(n)?;
            factorial(n).map(fmt_number).map_err(|e| e.to_string())
        }
        ("choose", [n, k]) => {
            let n = parse_number(n)?;
            let k = parse_number(k)?;
            n_choose_k(n, k).map(fmt_number).map_err(|e| e.to_string())
        }
        ("expand", [a, b, n]) => {
            let a = parse_number(a)?;
            let b = parse_number(b)?;
            let n = parse_number(n)?;
            binomial_expansion(a, b, n)
                .map(fmt_number)
                .map_err(|e| e.to_string())
        }
        ("prime", [n]) => {
            let n: u64 = n
                .parse()
                .map_err(|_| format!("'{}' is not a non-negative integer", n))?;
            Ok(if is_prime(n) {
                format!("{} is prime", n)
            } else {
                format!("{} is not prime", n)
            })
        }
        _ => Err(format!("unknown command '{}'\n{}", line, USAGE)),
    }
}

fn parse_number(token: &str) -> Result<f64, String> {
    token
        .parse()
        .map_err(|_| format!("'{}' is not a number", token))
}

/// Print integral results without a trailing `.0`.
fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
