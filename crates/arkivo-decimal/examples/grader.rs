use arkivo_decimal::{answers_match, sum};

fn main() {
    let operands = ["12.75", "0.25", "1000.005"];
    let submitted = "1013.0050";

    let expected = match sum(operands) {
        Ok(total) => total,
        Err(err) => {
            eprintln!("question generation failed: {}", err);
            std::process::exit(1);
        }
    };

    match answers_match(&expected, submitted) {
        Ok(correct) => {
            println!("{} = {}", operands.join(" + "), expected);
            println!("answer {} is {}", submitted, if correct { "correct" } else { "incorrect" });
        }
        Err(err) => {
            eprintln!("answer rejected: {}", err);
            std::process::exit(1);
        }
    }
}
