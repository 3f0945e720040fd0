// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code` spans.\nA second line of the same paragraph.\n\n- Bullet point with `inline`\n* Another **item**\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_line(spans: usize) -> String {
    let mut line = String::new();
    for i in 0..spans {
        match i % 4 {
            0 => line.push_str("plain words "),
            1 => line.push_str("**strong** "),
            2 => line.push_str("*soft* "),
            _ => line.push_str("`tick` "),
        }
    }
    // unmatched delimiters force every scanner to walk to the end
    line.push_str("* ** `");
    line
}
