//! Properties of the shortest path kernel on random and hand made graphs.
//!
//! RUST_LOG=spkernel=DEBUG cargo test --test properties -- --nocapture

use ndarray::{array, Array2, ArrayView1};

use rand::prelude::*;
use rand::distributions::Uniform;
use rand_xoshiro::Xoshiro256PlusPlus;

use spkernel::prelude::*;


fn log_init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}


// random undirected graph with labels in 0..nb_labels, returns labels and edges so that it can be permuted
fn random_graph_data(rng : &mut Xoshiro256PlusPlus, nb_labels : u8) -> (Vec<u8>, Vec<(usize, usize)>) {
    let nb_vertices = rng.gen_range(3..9);
    let unif = Uniform::<f64>::new(0., 1.);
    let labels : Vec<u8> = (0..nb_vertices).map(|_| rng.gen_range(0..nb_labels)).collect();
    let mut edges = Vec::<(usize, usize)>::new();
    for a in 0..nb_vertices {
        for b in (a+1)..nb_vertices {
            if rng.sample(unif) < 0.35 {
                edges.push((a, b));
            }
        }
    }
    (labels, edges)
} // end of random_graph_data


fn random_graphs(seed : u64, nb_graphs : usize) -> Vec<SpGraph<u8>> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..nb_graphs).map(|_| {
        let (labels, edges) = random_graph_data(&mut rng, 3);
        SpGraph::<u8>::from_labeled_edges(labels, &edges).unwrap()
    }).collect()
}


fn triangle() -> SpGraph<()> {
    SpGraph::<()>::from_labeled_edges(vec![(); 3], &[(0,1), (1,2), (0,2)]).unwrap()
}


//=====================================================================================


#[test]
fn gram_matrix_symetric_and_non_negative() {
    log_init_test();
    let graphs = random_graphs(4_577, 12);
    for with_labels in [true, false] {
        let params = SpKernelParams::new(Algorithm::Dijkstra, with_labels, false, false);
        let kernel = compute_kernel_matrix(&graphs, None, &params).unwrap();
        assert_eq!(kernel.dim(), (12, 12));
        for i in 0..12 {
            assert!(kernel[[i,i]] >= 0.);
            for j in 0..12 {
                assert_eq!(kernel[[i,j]], kernel[[j,i]]);
                // counts of matches : non negative integers
                assert!(kernel[[i,j]] >= 0.);
                assert_eq!(kernel[[i,j]].fract(), 0.);
            }
        }
    }
} // end of gram_matrix_symetric_and_non_negative


#[test]
fn permutation_invariance() {
    log_init_test();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(117);
    let reference = random_graphs(3_331, 4);
    let params = SpKernelParams::default();
    for _ in 0..10 {
        let (labels, edges) = random_graph_data(&mut rng, 3);
        let g = SpGraph::<u8>::from_labeled_edges(labels.clone(), &edges).unwrap();
        // vertex i becomes vertex perm[i]
        let mut perm : Vec<usize> = (0..labels.len()).collect();
        perm.shuffle(&mut rng);
        let mut p_labels = vec![0u8; labels.len()];
        for (i, l) in labels.iter().enumerate() {
            p_labels[perm[i]] = *l;
        }
        let p_edges : Vec<(usize, usize)> = edges.iter().map(|&(a, b)| (perm[b], perm[a])).collect();
        let p_g = SpGraph::<u8>::from_labeled_edges(p_labels, &p_edges).unwrap();
        for h in &reference {
            assert_eq!(compute_kernel(&g, h, &params).unwrap(), compute_kernel(&p_g, h, &params).unwrap());
        }
        assert_eq!(compute_kernel(&g, &g, &params).unwrap(), compute_kernel(&p_g, &p_g, &params).unwrap());
    }
} // end of permutation_invariance


#[test]
fn matrix_and_pair_agree() {
    log_init_test();
    let graphs = random_graphs(99, 2);
    let params = SpKernelParams::default();
    let kernel = compute_kernel_matrix(&graphs, None, &params).unwrap();
    let k01 = compute_kernel(&graphs[0], &graphs[1], &params).unwrap();
    assert_eq!(kernel[[1,0]], k01);
    assert_eq!(kernel[[0,1]], k01);
    // with a y batch : rows are y graphs
    let kernel_xy = compute_kernel_matrix(&graphs[0..1], Some(&graphs[1..2]), &params).unwrap();
    assert_eq!(kernel_xy.dim(), (1, 1));
    assert_eq!(kernel_xy[[0,0]], k01);
    let kernel_xy = compute_kernel_matrix(&graphs[0..1], Some(&graphs[..]), &params).unwrap();
    assert_eq!(kernel_xy.dim(), (2, 1));
    assert_eq!(kernel_xy[[0,0]], kernel[[0,0]]);
    assert_eq!(kernel_xy[[1,0]], k01);
} // end of matrix_and_pair_agree


#[test]
fn unreachable_pairs_are_excluded() {
    log_init_test();
    // A - B with an isolated third vertex, only its label differs
    let g1 = SpGraph::<char>::from_labeled_edges(vec!['A', 'B', 'X'], &[(0,1)]).unwrap();
    let g2 = SpGraph::<char>::from_labeled_edges(vec!['A', 'B', 'Y'], &[(0,1)]).unwrap();
    let h = SpGraph::<char>::from_labeled_edges(vec!['A', 'B'], &[(0,1)]).unwrap();
    let params = SpKernelParams::default();
    assert_eq!(compute_kernel(&g1, &h, &params).unwrap(), 2.);
    assert_eq!(compute_kernel(&g2, &h, &params).unwrap(), 2.);
    assert_eq!(compute_kernel(&g1, &g1, &params).unwrap(), compute_kernel(&g1, &g2, &params).unwrap());
} // end of unreachable_pairs_are_excluded


#[test]
fn two_triangles_unlabeled() {
    log_init_test();
    // each triangle has 6 ordered paths of length 1, so one feature with count 6
    let params = SpKernelParams::new(Algorithm::FloydWarshall, false, false, false);
    let kernel = compute_kernel_matrix(&[triangle()], None, &params).unwrap();
    assert_eq!(kernel, array![[36.]]);
    let kernel = compute_kernel_matrix(&[triangle(), triangle()], None, &params).unwrap();
    assert_eq!(kernel, Array2::<f64>::from_elem((2, 2), 36.));
} // end of two_triangles_unlabeled


#[test]
fn labeled_path_self_kernel() {
    log_init_test();
    let g = SpGraph::<&'static str>::from_labeled_edges(vec!["A", "B", "C"], &[(0,1), (1,2)]).unwrap();
    let params = SpKernelParams::default();
    let batch = spkernel::spkernel::matrix::batch_histograms(&[&g], &params).unwrap();
    // (A,B,1) (B,A,1) (B,C,1) (C,B,1) (A,C,2) (C,A,2)
    assert_eq!(batch.enumeration.len(), 6);
    assert!(batch.histograms[0].iter().all(|(_, count)| count == 1));
    assert_eq!(compute_kernel(&g, &g, &params).unwrap(), 6.);
} // end of labeled_path_self_kernel


#[test]
fn directed_pairs_are_ordered() {
    log_init_test();
    // A -> B and B -> A give features (A,B,1) and (B,A,1) which do not match
    let g = DiSpGraph::<char>::from_labeled_edges(vec!['A', 'B'], &[(0,1)]).unwrap();
    let h = DiSpGraph::<char>::from_labeled_edges(vec!['A', 'B'], &[(1,0)]).unwrap();
    let params = SpKernelParams::default();
    assert_eq!(compute_kernel(&g, &h, &params).unwrap(), 0.);
    assert_eq!(compute_kernel(&g, &g, &params).unwrap(), 1.);
} // end of directed_pairs_are_ordered


#[test]
fn attributed_identical_graphs() {
    log_init_test();
    let make = || {
        let nweights = vec![Nweight::from_attributes(array![1., 0.]), Nweight::from_attributes(array![0., 1.])];
        SpGraph::<()>::from_edges(nweights, &[(0,1)]).unwrap()
    };
    let (g, h) = (make(), make());
    let params = SpKernelParams::new(Algorithm::Dijkstra, false, true, false);
    let k_gh = compute_kernel(&g, &h, &params).unwrap();
    let k_gg = compute_kernel(&g, &g, &params).unwrap();
    assert_eq!(k_gh, k_gg);
    assert_eq!(k_gh, 2.);
    // Gaussian kernel : identical attributes give 1, orthogonal unit vectors give exp(-2 gamma)
    let sp_kernel = ShortestPathKernel::with_attribute_kernel(params, GaussianRbf::new(0.5));
    let expected = 2. * (1. + (-1.0f64).exp() * (-1.0f64).exp());
    assert!((sp_kernel.compute(&g, &h).unwrap() - expected).abs() < 1.0e-12);
} // end of attributed_identical_graphs


#[test]
fn attribute_kernel_error_propagates() {
    log_init_test();
    let g = SpGraph::<()>::from_edges(vec![Nweight::from_attributes(array![1., 0.]), Nweight::from_attributes(array![1., 0.])], &[(0,1)]).unwrap();
    let h = SpGraph::<()>::from_edges(vec![Nweight::from_attributes(array![1.]), Nweight::from_attributes(array![1.])], &[(0,1)]).unwrap();
    let params = SpKernelParams::new(Algorithm::Dijkstra, false, true, false);
    assert_eq!(compute_kernel(&g, &h, &params).unwrap_err(), KernelError::DimensionMismatch{expected : 2, got : 1});
    // a failing user kernel
    fn failing(x : ArrayView1<f64>, _y : ArrayView1<f64>) -> Result<f64, KernelError> {
        Err(KernelError::DimensionMismatch{expected : x.len(), got : 0})
    }
    let sp_kernel = ShortestPathKernel::with_attribute_kernel(params, failing);
    assert!(sp_kernel.compute(&g, &g).is_err());
} // end of attribute_kernel_error_propagates


#[test]
fn algorithms_agree() {
    log_init_test();
    let graphs = random_graphs(2_023, 8);
    let mut kernels = Vec::<Array2<f64>>::new();
    for algorithm in ["dijkstra", "floyd_warshall", "auto"] {
        let params = SpKernelParams::from_str_algorithm(algorithm, true, false, false).unwrap();
        kernels.push(compute_kernel_matrix(&graphs, None, &params).unwrap());
    }
    assert_eq!(kernels[0], kernels[1]);
    assert_eq!(kernels[0], kernels[2]);
} // end of algorithms_agree


#[test]
fn parallel_matches_serial() {
    log_init_test();
    let graphs_x = random_graphs(7, 10);
    let graphs_y = random_graphs(8, 5);
    let mut params = SpKernelParams::default();
    let serial = compute_kernel_matrix(&graphs_x, Some(&graphs_y), &params).unwrap();
    params.set_parallel(true);
    let parallel = compute_kernel_matrix(&graphs_x, Some(&graphs_y), &params).unwrap();
    assert_eq!(serial.dim(), (5, 10));
    assert_eq!(serial, parallel);
} // end of parallel_matches_serial


#[test]
fn unsupported_algorithm() {
    log_init_test();
    let res = SpKernelParams::from_str_algorithm("bfs", true, false, false);
    assert_eq!(res.unwrap_err(), KernelError::UnsupportedAlgorithm("bfs".to_string()));
} // end of unsupported_algorithm


//=====================================================================================

// a graph given directly by its path matrix, supporting only dijkstra
struct MatrixGraph {
    lengths : Array2<f64>,
    labels : Vec<u8>,
}

impl ShortestPathProvider for MatrixGraph {
    type Label = u8;

    fn vertex_count(&self) -> usize {
        self.lengths.nrows()
    }

    fn build_shortest_path_matrix(&self, algorithm : Algorithm, mode : LabelMode) -> Result<SpMatrices<u8>, KernelError> {
        if algorithm != Algorithm::Dijkstra {
            return Err(KernelError::UnsupportedAlgorithm(format!("{:?}", algorithm)));
        }
        let vertex_data = match mode {
            LabelMode::Vertex => VertexData::Labels(self.labels.clone()),
            _                 => VertexData::Nothing,
        };
        Ok(SpMatrices::new(self.lengths.clone(), vertex_data))
    }
} // end of impl ShortestPathProvider for MatrixGraph


#[test]
fn provider_errors_propagate() {
    log_init_test();
    let inf = f64::INFINITY;
    let g = MatrixGraph{lengths : array![[0., 1.], [inf, 0.]], labels : vec![1, 2]};
    let h = MatrixGraph{lengths : array![[0., 1.], [1., 0.]], labels : vec![1, 2]};
    let graphs = vec![g, h];
    let params = SpKernelParams::default();
    let kernel = compute_kernel_matrix(&graphs, None, &params).unwrap();
    assert_eq!(kernel, array![[1., 1.], [1., 2.]]);
    //
    let params = SpKernelParams::new(Algorithm::FloydWarshall, true, false, true);
    let res = compute_kernel_matrix(&graphs, None, &params);
    assert_eq!(res.unwrap_err(), KernelError::UnsupportedAlgorithm("FloydWarshall".to_string()));
    // labels not aligned with the path matrix
    let bad = vec![MatrixGraph{lengths : array![[0., 1.], [1., 0.]], labels : vec![1]}];
    let res = compute_kernel_matrix(&bad, None, &SpKernelParams::default());
    assert_eq!(res.unwrap_err(), KernelError::DimensionMismatch{expected : 2, got : 1});
} // end of provider_errors_propagate


#[test]
fn nan_weight_fails_whatever_the_algorithm() {
    log_init_test();
    // built directly in petgraph, bypassing SpGraph::add_edge checks
    let mut graph = petgraph::graph::Graph::<Nweight<u8>, f64, petgraph::Undirected>::new_undirected();
    let a = graph.add_node(Nweight::new(1));
    let b = graph.add_node(Nweight::new(2));
    graph.add_edge(a, b, f64::NAN);
    let g = SpGraph::from_graph(graph);
    for algorithm in ["dijkstra", "floyd_warshall", "auto"] {
        let params = SpKernelParams::from_str_algorithm(algorithm, true, false, false).unwrap();
        let res = compute_kernel(&g, &g, &params);
        assert!(matches!(res, Err(KernelError::InvalidWeight{from : 0, to : 1, ..})));
    }
} // end of nan_weight_fails_whatever_the_algorithm
