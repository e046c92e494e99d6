struct Page<'a, T> {
    items: Vec<T>,
    cursor: Option<&'a str>,
    total: usize,
}

type Lookup<V> = std::collections::BTreeMap<String, V>;

enum Tree<T> {
    Leaf(T),
    Node(Box<Tree<T>>, Box<Tree<T>>),
}

struct Cached<T> {
    value: std::sync::Arc<T>,
    history: std::collections::VecDeque<T>,
    tags: [String; 2],
}
