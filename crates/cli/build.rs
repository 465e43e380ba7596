use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("digest")
        .version("0.1.0")
        .author("Digest Contributors")
        .about("Restructure generated weekly digests")
        .arg(clap::arg!([INPUT] "Local HTML file, or '-' for stdin (default: stdin)"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-c --config <FILE> "Settings file (default: <config dir>/digest/digest.conf)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (html, json, summary)")
                .value_name("FORMAT")
                .default_value("html")
                .value_parser(["html", "json", "summary"]),
        )
        .arg(clap::arg!(--no_toc "Do not insert the navigation block"))
        .arg(
            clap::arg!(--style <STYLE> "Navigation layout (list, paragraph)")
                .value_name("STYLE")
                .value_parser(["list", "paragraph"]),
        )
        .arg(clap::arg!(--navigation_title <TITLE> "Heading text of the navigation block").value_name("TITLE"))
        .arg(clap::arg!(--no_split "Keep items in their original order instead of grouping by source"))
        .arg(clap::arg!(--reorder "Reorder sections by the configured priority"))
        .arg(clap::arg!(--strip_sections "Drop matching section headings that precede the first item"))
        .arg(
            clap::arg!(--strip_title <TEXT> "Section heading substring to drop (repeatable)")
                .value_name("TEXT")
                .action(clap::ArgAction::Append),
        )
        .arg(
            clap::arg!(--official <ORIGIN> "Channel name whose links count as official (repeatable)")
                .value_name("ORIGIN")
                .action(clap::ArgAction::Append),
        )
        .arg(clap::arg!(--raw "Input is a raw generator response with a summary marker"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "digest", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "digest", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "digest", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "digest", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
