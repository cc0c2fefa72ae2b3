use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use hordere::config::SiteConfig;
use hordere::curate::Section;
use hordere::index::PostIndex;
use hordere::post::{read_posts, Post};
use hordere::site;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = App::new("hordere")
        .about("Prints curated views over the blog's post collection")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("project")
                .short("p")
                .long("project")
                .value_name("FILE")
                .help("Path to the hordere.yaml project file")
                .takes_value(true)
                .global(true),
        )
        .subcommand(SubCommand::with_name("home").about("The home page view"))
        .subcommand(
            SubCommand::with_name("list")
                .about("One page of the chronological listing")
                .arg(page_arg()),
        )
        .subcommand(
            SubCommand::with_name("tag")
                .about("One page of a tag's listing")
                .arg(Arg::with_name("label").required(true))
                .arg(page_arg()),
        )
        .subcommand(
            SubCommand::with_name("post")
                .about("A single post's view")
                .arg(Arg::with_name("slug").required(true)),
        )
        .get_matches();

    let config = match matches.value_of("project") {
        Some(path) => SiteConfig::from_file(Path::new(path))?,
        None => SiteConfig::from_directory(&std::env::current_dir()?)?,
    };
    let index = PostIndex::build(read_posts(&config.posts_file)?);

    match matches.subcommand() {
        ("home", _) => print_home(&site::home(&index, &config)),
        ("list", Some(sub)) => print_listing(&site::listing(&index, &config, page_of(sub)?)?),
        ("tag", Some(sub)) => {
            let label = sub.value_of("label").unwrap(); // required by clap
            print_listing(&site::tag_listing(&index, &config, label, page_of(sub)?)?)
        }
        ("post", Some(sub)) => {
            let slug = sub.value_of("slug").unwrap(); // required by clap
            match site::post_view(&index, &config, slug) {
                Some(view) => print_post(&view),
                None => return Err(anyhow!("No post with slug `{}`", slug)),
            }
        }
        _ => unreachable!("subcommand required by clap"),
    }
    Ok(())
}

fn page_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("page")
        .short("n")
        .long("page")
        .value_name("N")
        .help("The 1-based page number")
        .takes_value(true)
}

fn page_of(matches: &ArgMatches) -> Result<usize> {
    match matches.value_of("page") {
        None => Ok(1),
        Some(raw) => raw
            .parse()
            .map_err(|_| anyhow!("Invalid page number `{}`", raw)),
    }
}

fn print_home(home: &site::HomePage) {
    println!("Latest");
    for post in &home.latest {
        print_line(post);
    }
    for section in &home.sections {
        println!();
        print_section(section, "No posts yet.");
    }
}

fn print_listing(listing: &site::Listing) {
    println!(
        "{} (page {} of {})",
        listing.title, listing.nav.current_page, listing.nav.total_pages
    );
    for post in &listing.items {
        print_line(post);
    }
    if let Some(prev) = listing.nav.prev() {
        println!("prev: {}", prev);
    }
    if let Some(next) = listing.nav.next() {
        println!("next: {}", next);
    }
}

fn print_post(view: &site::PostView) {
    print_line(view.post);
    if let Some(prev) = view.prev {
        println!("prev: {}", prev.title);
    }
    if let Some(next) = view.next {
        println!("next: {}", next.title);
    }
    for section in &view.sidebar {
        println!();
        print_section(section, "No updates.");
    }
}

fn print_section(section: &Section, empty: &str) {
    println!("{}", section.label);
    if section.posts.is_empty() {
        println!("  {}", empty);
    }
    for post in &section.posts {
        print_line(post);
    }
}

fn print_line(post: &Post) {
    println!("  {}  {}  ({})", post.date, post.title, post.path);
}
