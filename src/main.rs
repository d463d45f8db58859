use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    hotmess_coach::cli::main()
}
