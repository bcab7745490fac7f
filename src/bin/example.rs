use std::io::BufRead;

use articulation::{ArticulationResult, Graph};

fn add_vertex(g: &mut Graph, label: &str) {
    println!("Adding vertex {}", label);
    g.add_vertex(label);
}

fn add_edge(g: &mut Graph, u: &str, v: &str) {
    println!("Adding edge from {} to {}", u, v);
    g.add_edge(u, v);
}

fn print_result(g: &Graph, res: &ArticulationResult) {
    for u in g.vertices() {
        let mark = if res.is_articulation_point(u) {
            "articulation point"
        } else {
            "-"
        };
        println!("  {} {}", u, mark);
    }
    println!("Complexity: {}", res.complexity);
}

fn analyze(g: &Graph) {
    print_result(g, &g.analyze());
}

/// Commands, one per line: `v <label>`, `e <u> <v>`, `analyze`. An edge line needs exactly
/// two labels and is ignored otherwise. Returns the graph built.
fn run_commands(input: impl BufRead) -> std::io::Result<Graph> {
    let mut g = Graph::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        let (cmd, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(cmd, rest)| (cmd, rest.trim()));
        match cmd {
            "v" if !rest.is_empty() => add_vertex(&mut g, rest),
            "e" => match rest.split_whitespace().collect::<Vec<_>>()[..] {
                [u, v] => add_edge(&mut g, u, v),
                _ => println!("Ignoring edge {:?}, expected 2 labels", rest),
            },
            "analyze" if rest.is_empty() => analyze(&g),
            "" => {}
            _ => println!("Unknown command {:?}", line),
        }
    }
    Ok(g)
}

fn main() -> std::io::Result<()> {
    if std::env::args().nth(1).as_deref() == Some("-") {
        run_commands(std::io::stdin().lock())?;
        return Ok(());
    }
    let mut g = Graph::new();
    for (u, v) in [("a", "b"), ("b", "c"), ("c", "d")] {
        g.add_edge(u, v);
    }
    println!("Created a path a - b - c - d");
    analyze(&g);
    add_edge(&mut g, "b", "b");
    analyze(&g);
    add_edge(&mut g, "d", "a");
    analyze(&g);
    add_vertex(&mut g, "e");
    add_edge(&mut g, "e", "a");
    add_edge(&mut g, "e", "f");
    analyze(&g);
    Ok(())
}
