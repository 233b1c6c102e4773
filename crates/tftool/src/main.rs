use miette::Result;

mod actions;
mod args;
mod colour;
mod json;
mod wire;

fn main() -> Result<()> {
	let (args, _guard) = args::get_args()?;
	actions::run(args)
}
