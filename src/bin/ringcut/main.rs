//! ringcut CLI - selection-driven mesh cutting from the command line.
//!
//! Usage: ringcut <COMMAND> [OPTIONS] <INPUT> [OUTPUT]
//!
//! Run `ringcut --help` for available commands. Set `RUST_LOG=debug` for
//! per-pass statistics.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};

use ringcut::algo::subdivide::{CornerType, RingSubdivider};
use ringcut::io;
use ringcut::mesh::{EdgeId, FaceId, PolyMesh, SelectMode, VertexId};
use ringcut::ops::{
    self, ConnectOptions, DeselectBoundaryOptions, EditSession, MeshObject, OperatorOutcome,
    ReportLevel,
};

#[derive(Parser)]
#[command(name = "ringcut")]
#[command(author, version, about = "Selection-driven mesh cutting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display mesh information
    Info {
        /// Input mesh file
        input: PathBuf,
    },

    /// Shrink a face selection to its inner edges
    DeselectBoundary {
        /// Input mesh file
        input: PathBuf,

        #[command(flatten)]
        selection: Selection,

        /// Keep the cap edges of straight strips
        #[arg(long)]
        keep_caps: bool,

        /// Write the mesh here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Cut through selected faces or edge rings
    Connect {
        /// Input mesh file
        input: PathBuf,

        /// Output mesh file
        output: PathBuf,

        #[command(flatten)]
        selection: Selection,

        /// Number of cuts per edge
        #[arg(short, long, default_value = "1")]
        cuts: usize,

        /// Tessellate faces on the selection boundary instead of leaving n-gons
        #[arg(long)]
        tessellate_boundary: bool,

        /// Quad corner pattern
        #[arg(long, value_enum, default_value = "straight-cut")]
        corner: CornerArg,

        /// Leave fully enclosed quads as n-gons
        #[arg(long)]
        no_grid_fill: bool,
    },
}

/// The initial selection, given either as faces or as edges.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct Selection {
    /// Select faces by index (face select mode)
    #[arg(short, long, value_delimiter = ',')]
    faces: Vec<usize>,

    /// Select edges by vertex pair, e.g. `1-5,2-6` (edge select mode)
    #[arg(short, long, value_delimiter = ',', value_parser = parse_edge)]
    edges: Vec<(usize, usize)>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CornerArg {
    /// Quads through a vertex on the corner diagonal
    InnerVert,
    /// Cuts through a vertex on the corner diagonal
    Path,
    /// Fan to the opposite corner
    Fan,
    /// Straight cuts between the cut sides
    StraightCut,
}

impl From<CornerArg> for CornerType {
    fn from(arg: CornerArg) -> Self {
        match arg {
            CornerArg::InnerVert => CornerType::InnerVertex,
            CornerArg::Path => CornerType::Path,
            CornerArg::Fan => CornerType::Fan,
            CornerArg::StraightCut => CornerType::StraightCut,
        }
    }
}

fn parse_edge(s: &str) -> Result<(usize, usize), String> {
    let (a, b) = s
        .split_once('-')
        .ok_or_else(|| format!("expected <a>-<b>, got '{}'", s))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<usize>()
            .map_err(|e| format!("bad vertex index '{}': {}", v, e))
    };
    Ok((parse(a)?, parse(b)?))
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { input } => cmd_info(&input)?,

        Commands::DeselectBoundary {
            input,
            selection,
            keep_caps,
            output,
        } => {
            let options = DeselectBoundaryOptions::default().with_keep_caps(keep_caps);
            cmd_operator(&input, output.as_deref(), &selection, |object| {
                ops::deselect_boundary(object, &options)
            })?;
        }

        Commands::Connect {
            input,
            output,
            selection,
            cuts,
            tessellate_boundary,
            corner,
            no_grid_fill,
        } => {
            let options = ConnectOptions::default()
                .with_cuts(cuts)
                .with_boundary_ngons(!tessellate_boundary)
                .with_corner(corner.into())
                .with_grid_fill(!no_grid_fill);
            cmd_operator(&input, Some(output.as_path()), &selection, |object| {
                ops::connect(object, &options, &RingSubdivider)
            })?;
        }
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = io::load(input)?;

    println!("File: {}", input.display());
    println!("Vertices: {}", mesh.num_vertices());
    println!("Edges: {}", mesh.num_edges());
    println!("Faces: {}", mesh.num_faces());
    println!("Loops: {}", mesh.num_loops());

    let mut ranks: BTreeMap<usize, usize> = BTreeMap::new();
    for f in mesh.face_ids() {
        *ranks.entry(mesh.face_rank(f)).or_default() += 1;
    }
    let histogram: Vec<String> = ranks
        .iter()
        .map(|(rank, count)| format!("{}x{}", count, rank))
        .collect();
    println!("Face ranks: {}", histogram.join(", "));

    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }

    let boundary = mesh.edge_ids().filter(|&e| mesh.is_boundary_edge(e)).count();
    let non_manifold = mesh.edge_ids().filter(|&e| mesh.edge_degree(e) > 2).count();
    let wire = mesh.edge_ids().filter(|&e| mesh.edge_degree(e) == 0).count();
    println!("Boundary edges: {}", boundary);
    println!("Non-manifold edges: {}", non_manifold);
    if wire > 0 {
        println!("Wire edges: {}", wire);
    }

    Ok(())
}

/// Load a mesh, apply the selection, run one operator in edit mode and
/// print the resulting edge selection.
fn cmd_operator<F>(
    input: &Path,
    output: Option<&Path>,
    selection: &Selection,
    operator: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(&mut MeshObject) -> OperatorOutcome,
{
    let mesh = io::load(input)?;
    println!(
        "Loaded: {} vertices, {} faces",
        mesh.num_vertices(),
        mesh.num_faces()
    );

    let name = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mesh")
        .to_string();
    let mut object = MeshObject::new(name, mesh);
    apply_selection(&mut object, selection)?;

    object.enter_edit_mode();
    let start = Instant::now();
    let outcome = operator(&mut object);
    let elapsed = start.elapsed();
    object.exit_edit_mode();

    for report in &outcome.reports {
        match report.level {
            ReportLevel::Info => println!("{}", report.message),
            ReportLevel::Error => eprintln!("Error: {}", report.message),
        }
    }
    println!("Status: {:?} ({:.2?})", outcome.status, elapsed);

    let mesh = object.into_mesh();
    print_selected_edges(&mesh);

    if let Some(output) = output {
        io::save(&mesh, output)?;
        println!(
            "Saved: {} ({} vertices, {} faces)",
            output.display(),
            mesh.num_vertices(),
            mesh.num_faces()
        );
    }

    Ok(())
}

/// Select the requested faces or edges on the stored mesh.
fn apply_selection(
    object: &mut MeshObject,
    selection: &Selection,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut mesh = EditSession::open(object);
    mesh.select_all(false);

    if !selection.faces.is_empty() {
        mesh.select_mode = SelectMode::FACE;
        for &f in &selection.faces {
            let count = mesh.num_faces();
            if f >= count {
                return Err(format!("face {} out of range (mesh has {})", f, count).into());
            }
            mesh.select_face(FaceId::new(f));
        }
    } else {
        mesh.select_mode = SelectMode::EDGE;
        for &(a, b) in &selection.edges {
            let e = find_edge(&mesh, a, b).ok_or_else(|| format!("no edge {}-{}", a, b))?;
            mesh.select_edge(e);
        }
    }
    Ok(())
}

fn find_edge(mesh: &PolyMesh, a: usize, b: usize) -> Option<EdgeId> {
    if a >= mesh.num_vertices() || b >= mesh.num_vertices() {
        return None;
    }
    mesh.find_edge(VertexId::new(a), VertexId::new(b))
}

fn print_selected_edges(mesh: &PolyMesh) {
    let edges: Vec<String> = mesh
        .selected_edges()
        .map(|e| {
            let [a, b] = mesh.edge_vertices(e);
            format!("{}-{}", a.index(), b.index())
        })
        .collect();
    println!("Selected edges ({}): {}", edges.len(), edges.join(","));
}
