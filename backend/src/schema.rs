use async_graphql::{Context, EmptySubscription, ID, InputObject, Object, Schema, SimpleObject};
use common::{Character, CharacterInput, Directory, Identity};

pub type GameSchema = Schema<Query, Mutation, EmptySubscription>;

pub fn build(directory: Directory) -> GameSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(directory)
        .finish()
}

/// Requests without an attached identity are served as anonymous.
fn identity(ctx: &Context<'_>) -> Identity {
    ctx.data_opt::<Identity>()
        .cloned()
        .unwrap_or_else(Identity::anonymous)
}

#[derive(SimpleObject)]
pub struct GameCharacter {
    id: ID,
    name: String,
    debut_game: String,
    release_year: i32,
    img: String,
    desc: String,
    wiki: String,
    public: bool,
    owner: String,
}

impl From<Character> for GameCharacter {
    fn from(character: Character) -> Self {
        GameCharacter {
            id: ID(character.id),
            name: character.name,
            debut_game: character.debut_game,
            release_year: character.release_year,
            img: character.img,
            desc: character.desc,
            wiki: character.wiki,
            public: character.public,
            owner: character.owner,
        }
    }
}

#[derive(InputObject)]
pub struct GameCharacterInput {
    name: String,
    debut_game: String,
    release_year: i32,
    img: String,
    desc: String,
    wiki: String,
    public: bool,
    owner: String,
}

impl From<GameCharacterInput> for CharacterInput {
    fn from(input: GameCharacterInput) -> Self {
        CharacterInput {
            name: input.name,
            debut_game: input.debut_game,
            release_year: input.release_year,
            img: input.img,
            desc: input.desc,
            wiki: input.wiki,
            public: input.public,
            owner: input.owner,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Result")]
pub struct MutationResult {
    op: String,
    count: i32,
}

pub struct Query;

#[Object]
impl Query {
    /// A single character, if it exists and the caller may see it.
    async fn character(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<GameCharacter>> {
        let directory = ctx.data::<Directory>()?;

        Ok(directory
            .get_by_id(&id, &identity(ctx))
            .map(GameCharacter::from))
    }

    /// Every character the caller may see.
    async fn characters(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<GameCharacter>> {
        let directory = ctx.data::<Directory>()?;

        Ok(directory
            .list_all(&identity(ctx))
            .into_iter()
            .map(GameCharacter::from)
            .collect())
    }
}

pub struct Mutation;

#[Object]
impl Mutation {
    async fn add_character(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "char")] input: GameCharacterInput,
    ) -> async_graphql::Result<GameCharacter> {
        let directory = ctx.data::<Directory>()?;
        let input = CharacterInput::from(input);
        // Owner comes from the input, as clients send it.
        let owner = input.owner.clone();

        Ok(directory.add(input, owner).into())
    }

    async fn remove_character(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<MutationResult> {
        let directory = ctx.data::<Directory>()?;
        let count = directory.remove(&id, &identity(ctx));

        Ok(MutationResult {
            op: "delete".to_owned(),
            count: count as i32,
        })
    }
}
