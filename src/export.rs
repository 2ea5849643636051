use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::nfa::Nfa;

pub(crate) fn write_json(nfa: &Nfa, path: &Path) -> io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut f, nfa)?;
    f.write_all(b"\n")?;
    f.flush()
}

pub(crate) fn write_dot(nfa: &Nfa, path: &Path) -> io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    f.write_all(render_dot(nfa).as_bytes())?;
    f.flush()
}

pub(crate) fn render_dot(nfa: &Nfa) -> String {
    let mut out = String::from("digraph nfa {\n\trankdir=LR;\n\t__start [shape=point];\n");

    for state in &nfa.states {
        let shape = if nfa.accept_states.contains(state) {
            "doublecircle"
        } else {
            "circle"
        };
        out.push_str(&format!("\t{} [shape={}];\n", state, shape));
    }

    out.push_str(&format!("\t__start -> {};\n", nfa.start_state));

    for (from, cond, to) in nfa.edges() {
        out.push_str(&format!("\t{} -> {} [label=\"{}\"];\n", from, to, cond.to_label()));
    }

    out.push_str("}\n");
    out
}
