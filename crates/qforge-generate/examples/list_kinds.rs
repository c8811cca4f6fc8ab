use qforge_generate::Selector;
use qforge_generate::generators::GeneratorRegistry;

fn main() {
    let registry = GeneratorRegistry::new();
    for selector in Selector::all() {
        let kind = match selector {
            Selector::Atom(kind) | Selector::Vector(kind) => registry
                .generator(kind)
                .map(|generator| generator.id())
                .unwrap_or("-"),
            Selector::Dictionary | Selector::Table => "fixture",
        };
        println!("{selector}\t{kind}");
    }
}
