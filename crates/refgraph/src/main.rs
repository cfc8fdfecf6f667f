use anyhow::Result;

fn main() -> Result<()> {
    refgraph_lib::main()
}
