#![allow(missing_docs)]

use divan::{Bencher, black_box, counter::BytesCount};
use regex_collection::{PatternName, PatternRegistry};

fn main() {
    regex_collection::init();
    divan::main();
}

static SAMPLE_TEXT: &str = "Visit http://foo.com/bar or www.example.org for {{ RANDOM | red | blue }} \
     details.\n```python\nprint('hi')\n```\nShip to Los Angeles CA 90001-1234, \
     host sub.example.com, slug My--Post__Title!\n";

fn corpus() -> String {
    SAMPLE_TEXT.repeat(50)
}

const NAMES: &[PatternName] = &[
    PatternName::Spaces,
    PatternName::AlphaNumericAndDashUnderscore,
    PatternName::DoubleOccurrencesOfDashUnderscore,
    PatternName::Url,
    PatternName::Spintax,
    PatternName::MarkdownCodeFence,
];

#[divan::bench(args = NAMES)]
fn shared_find_iter(
    bencher: Bencher,
    name: PatternName,
) {
    let text = corpus();
    let matcher = name.matcher();
    bencher
        .counter(BytesCount::new(text.len()))
        .bench(|| matcher.find_iter(black_box(&text)).count());
}

#[divan::bench(args = NAMES)]
fn recompiled_find_iter(
    bencher: Bencher,
    name: PatternName,
) {
    let text = corpus();
    bencher.counter(BytesCount::new(text.len())).bench(|| {
        let regex = name.pattern().compile().unwrap();
        regex.find_iter(black_box(&text)).count()
    });
}

#[divan::bench]
fn registry_construction() -> PatternRegistry {
    PatternRegistry::new().unwrap()
}

#[divan::bench]
fn dns_hostname_validation(bencher: Bencher) {
    let hosts = ["sub.example.com", "-bad.com", "a.co", "example_underscore.com"];
    let matcher = PatternName::DnsHostname.matcher();
    bencher.bench(|| {
        hosts
            .iter()
            .filter(|host| matcher.is_full_match(black_box(host)))
            .count()
    });
}
