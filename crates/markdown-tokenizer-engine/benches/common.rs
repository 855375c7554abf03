// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section with **bold** text\n\nParagraph with *some* content and a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n- Another item\n  ```rust\n  let x = 1;\n  ```\n\n1. First\n2. Second\n\n> Quoted line\n---\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_span_heavy_line(spans: usize) -> String {
    let mut line = String::new();
    for i in 0..spans {
        line.push_str(&format!(
            "word{i} **bold{i}** _it{i}_ ![img{i}](src{i}.png) [link{i}](url{i}) "
        ));
    }
    line
}
