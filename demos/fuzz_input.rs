mod common;
use common::rand_u;
use regex_gen::Pattern;

fn main() {
    // The same bytes always produce the same request line, so a fuzzer can
    // mutate the bytes and still only ever produce well formed input.
    let pattern: Pattern = r"(GET|POST|PUT|DELETE) /([a-z0-9]{1,8}/){0,3}(\?[a-z]=[0-9]+)? HTTP/1\.[01]"
        .parse()
        .unwrap();
    println!("{}", pattern);

    for _ in 0..5 {
        let mut buf = [0; 128];
        let mut u = rand_u(&mut buf);
        let request: Vec<u8> = pattern.generate(&mut u).unwrap();
        println!("{}", String::from_utf8_lossy(&request));
    }
}
