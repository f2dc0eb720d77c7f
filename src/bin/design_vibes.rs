use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    design_vibes::apps::run(std::env::args().skip(1))
}
