//! End-to-end scenarios through the line driver: text in, trades and rendered book out.

use iceberg_matching_engine::{run_stream, Config, Engine, MalformedPolicy, OrderId};

fn quiet() -> Config {
    Config {
        print_book: false,
        ..Config::default()
    }
}

fn run(engine: &mut Engine, input: &str, config: &Config) -> String {
    let mut out = Vec::new();
    run_stream(engine, input.as_bytes(), &mut out, config).unwrap();
    String::from_utf8(out).unwrap()
}

fn asks(engine: &Engine) -> Vec<(u64, i64, u64)> {
    engine.book().asks().iter().map(|o| (o.id.0, o.price, o.quantity)).collect()
}

#[test]
fn scenario_partial_fill_then_price_improvement() {
    let mut engine = Engine::new();

    assert_eq!(run(&mut engine, "S,1,100,10\n", &quiet()), "");
    assert_eq!(asks(&engine), vec![(1, 100, 10)]);

    assert_eq!(run(&mut engine, "B,2,100,4\n", &quiet()), "1,2,100,4\n");
    assert_eq!(asks(&engine), vec![(1, 100, 6)]);
    assert!(engine.book().bids().is_empty());

    // Limit 101 crosses the 100 ask and trades at 100.
    assert_eq!(run(&mut engine, "B,3,101,6\n", &quiet()), "1,3,100,6\n");
    assert!(engine.book().is_empty());
}

#[test]
fn scenario_iceberg_fully_filled_by_one_aggressor() {
    let mut engine = Engine::new();
    let out = run(&mut engine, "S,4,50,100,10\n", &Config::default());
    assert!(out.contains("|          |             |       |     50|           10|         4|"));
    assert_eq!(engine.snapshot().asks[0].displayed_volume, 10);

    assert_eq!(run(&mut engine, "B,5,50,100\n", &quiet()), "4,5,50,100\n");
    assert!(engine.book().is_empty());
    assert!(!engine.book().contains(OrderId(5)));
}

#[test]
fn rendered_book_after_mixed_flow() {
    let input = "\
# sample session
B,100322,5103,7500
S,100345,5109,100000,10000
B,100323,5103,2000

S,100346,5110,5000
";
    let mut engine = Engine::new();
    let out = run(&mut engine, input, &Config::default());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        &lines[lines.len() - 3..],
        &[
            "|    100322|        7,500|  5,103|  5,109|       10,000|    100345|",
            "|    100323|        2,000|  5,103|  5,110|        5,000|    100346|",
            "+-----------------------------------------------------------------+",
        ]
    );
    // One table per instruction, no trades.
    assert_eq!(out.matches("| BUY ").count(), 4);
}

#[test]
fn malformed_lines_do_not_touch_the_book() {
    let mut engine = Engine::new();
    let input = "S,1,100,10\nQ,2,100,4\nB,3,100\nB,4,x,4\n";
    let out = run(&mut engine, input, &quiet());
    assert_eq!(out, "");
    assert_eq!(asks(&engine), vec![(1, 100, 10)]);

    let abort = Config {
        on_malformed: MalformedPolicy::Abort,
        ..quiet()
    };
    let mut out = Vec::new();
    let err = run_stream(&mut engine, "B,5,100,1,2,3\n".as_bytes(), &mut out, &abort).unwrap_err();
    assert!(err.to_string().contains("line 1"));
    assert_eq!(asks(&engine), vec![(1, 100, 10)]);
}
