use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks and Actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceStore
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;
    type Error: std::error::Error + Send + Sync;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload, rejecting invalid payloads
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, Self::Error>;

    /// Error reported when a generated id is already taken
    fn already_exists(id: &Self::Id) -> Self::Error;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler ---

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC STORE
// =============================================================================

/// In-memory store keyed by entity id. Iteration follows insertion order.
pub struct ResourceStore<T: Entity> {
    items: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceStore<T> {
    pub fn new(next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static) -> Self {
        Self {
            items: HashMap::new(),
            order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        }
    }

    /// Builds and inserts a new entity. Nothing is stored when a hook fails
    /// or when the generated id is already taken.
    pub fn create(&mut self, payload: T::CreatePayload) -> Result<T, T::Error> {
        let id = (self.next_id_fn)();
        let mut item = T::from_create(id, payload)?;
        item.on_create()?;
        match self.items.entry(item.id().clone()) {
            Entry::Occupied(entry) => Err(T::already_exists(entry.key())),
            Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                entry.insert(item.clone());
                Ok(item)
            }
        }
    }

    pub fn get<Q>(&self, id: &Q) -> Option<&T>
    where
        T::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.get(id)
    }

    /// Runs `action` against the entity, or returns `None` when `id` is unknown.
    pub fn perform_action<Q>(
        &mut self,
        id: &Q,
        action: T::Action,
    ) -> Option<Result<T::ActionResult, T::Error>>
    where
        T::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.get_mut(id).map(|item| item.handle_action(action))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.order.clear();
    }
}
