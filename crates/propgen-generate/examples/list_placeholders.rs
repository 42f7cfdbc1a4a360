use propgen_generate::FakeText;

fn main() {
    for id in FakeText::list_ids() {
        println!("{{{{{id}}}}}");
    }
}
