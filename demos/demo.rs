use hybrid_flow::{prelude::*, Config, Locate};

fn main() {
    env_logger::init();

    let mut list = DoublyLinkedList::with_config(Config::new(Locate::Nearest));
    for word in ["red", "green", "blue"].iter() {
        list.append(word.to_string());
    }
    list.insert_at(1, "yellow".to_string()).unwrap();
    println!("list: {:?}", list);

    match list.element_at(9) {
        Ok(found) => println!("found {}", found),
        Err(e) => println!("lookup failed: {}", e),
    }

    let removed = list.remove_at(2).unwrap();
    println!("removed {}, left {:?}", removed, list);

    let mut flow = HybridFlowProcessor::new();
    flow.push(1);
    flow.push(2);
    flow.enqueue(0);
    println!("chain: {:?}", flow.iter().collect::<Vec<_>>());

    while let Ok(item) = flow.pop() {
        println!("pop {}", item);
    }
    if let Err(e) = flow.dequeue() {
        println!("dequeue failed: {}", e);
    }
}
