use super::kernels::KERNELS;

pub fn run() {
    print!("{}", render());
}

/// One line per bundled kernel: name, then description.
pub fn render() -> String {
    let width = KERNELS
        .iter()
        .map(|kernel| kernel.name.len())
        .max()
        .unwrap_or(0);
    let mut out = format!("Bundled kernels ({}):\n", KERNELS.len());
    for kernel in KERNELS {
        out.push_str(&format!(
            "  {:width$}  {}\n",
            kernel.name, kernel.description
        ));
    }
    out
}
