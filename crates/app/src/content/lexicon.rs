//! Reference pages. Bodies use the light markup understood by the page
//! renderer: `##` headings, fenced code blocks and `-` bullets.

/// A titled reference page.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub title: &'static str,
    pub body: &'static str,
}

/// A named group of pages, shown as one sub-menu.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub name: &'static str,
    pub description: &'static str,
    pub pages: &'static [Page],
}

pub const SECTIONS: &[Section] = &[
    Section {
        name: "Terminal Commands",
        description: "Command line essentials",
        pages: &[
            Page {
                title: "Filesystem Navigation",
                body: FILESYSTEM,
            },
            Page {
                title: "File Operations",
                body: FILE_OPERATIONS,
            },
            Page {
                title: "Process Management",
                body: PROCESSES,
            },
        ],
    },
    Section {
        name: "Git Commands",
        description: "Version control commands",
        pages: &[
            Page {
                title: "Repository Inspection",
                body: GIT_INSPECTION,
            },
            Page {
                title: "Staging & Committing",
                body: GIT_STAGING,
            },
            Page {
                title: "Branch Management",
                body: GIT_BRANCHES,
            },
            Page {
                title: "Merging & Rebasing",
                body: GIT_MERGE_REBASE,
            },
            Page {
                title: "Remote Operations",
                body: GIT_REMOTES,
            },
        ],
    },
    Section {
        name: "Common Workflows",
        description: "Step-by-step guides",
        pages: &[
            Page {
                title: "Feature Branch Workflow",
                body: FEATURE_BRANCH,
            },
            Page {
                title: "Rebase onto Main",
                body: REBASE_WORKFLOW,
            },
        ],
    },
    Section {
        name: "Safety Warnings",
        description: "Commands to handle with care",
        pages: &[Page {
            title: "Dangerous Commands",
            body: SAFETY,
        }],
    },
];

const FILESYSTEM: &str = "
## Listing
```
ls <path>                    # list a directory
ls -la <path>                # include hidden files, long format
```

## Moving Around
```
cd <path>                    # change directory
cd ..                        # up one level
cd ~                         # home directory
cd -                         # previous directory
pwd                          # print the working directory
```

## Directories
```
mkdir <dir>                  # create a directory
mkdir -p a/b/c               # create nested directories
```
";

const FILE_OPERATIONS: &str = "
## Create
```
touch <file>                 # empty file, or bump its timestamp
```

## Copy & Move
```
cp <src> <dest>              # copy a file
cp -r <src> <dest>           # copy a directory tree
mv <src> <dest>              # move or rename
```

## Delete
```
rm <file>                    # delete a file
rm -r <dir>                  # delete a directory tree
```
- rm does not ask twice. There is no recycle bin.
";

const PROCESSES: &str = "
## Inspect
```
ps aux                       # every process, detailed
top                          # live process view
```

## Stop
```
kill <pid>                   # ask a process to terminate
kill -9 <pid>                # force it
```

## Jobs
```
<command> &                  # start in the background
jobs                         # list background jobs
fg                           # bring the latest job forward
Ctrl+Z                       # pause the foreground job
```
";

const GIT_INSPECTION: &str = "
## Status & Diff
```
git status                   # branch and working tree state
git diff                     # unstaged changes
git diff --staged            # changes queued for the next commit
```

## History
```
git log --oneline            # compact history
git log --graph --oneline --all
git show <commit>            # one commit in detail
```
";

const GIT_STAGING: &str = "
## Stage
```
git add <file>               # stage one file
git add .                    # stage everything below here
git add -p                   # pick hunks interactively
```

## Unstage
```
git restore --staged <file>  # unstage, keep the edits
```

## Commit
```
git commit -m \"message\"      # commit the staged changes
git commit --amend           # rewrite the last commit
```
- One logical change per commit.
- Write the message in the present tense.
";

const GIT_BRANCHES: &str = "
## Switch
```
git switch <branch>          # move to an existing branch
git switch -c <branch>       # create it and move there
git checkout -b <branch>     # the classic spelling
```

## Delete & Rename
```
git branch -d <branch>       # delete if merged
git branch -D <branch>       # delete regardless
git branch -m <new-name>     # rename the current branch
```
";

const GIT_MERGE_REBASE: &str = "
## Merge
```
git merge <branch>           # merge into the current branch
git merge --no-ff <branch>   # always record a merge commit
git merge --squash <branch>  # fold everything into one commit
```

## Rebase
```
git rebase <base>            # replay this branch onto <base>
git rebase --continue        # after fixing a conflict
git rebase --abort           # back to where you started
```
- Rebasing rewrites history. Avoid it on shared branches.
";

const GIT_REMOTES: &str = "
## Push
```
git push -u origin <branch>  # push and track
git push --force-with-lease  # force push, but only over what you have seen
```

## Fetch
```
git fetch origin             # update remote refs, touch nothing local
git pull --rebase            # fetch, then rebase local work on top
```
";

const FEATURE_BRANCH: &str = "
## Steps
```
git switch -c feature/login  # 1. branch
git add src/login.rs         # 2. stage
git commit -m \"Add login\"    # 3. commit
git push -u origin feature/login  # 4. publish
```
";

const REBASE_WORKFLOW: &str = "
## Steps
```
git switch feature/login     # 1. go to the feature branch
git fetch origin             # 2. refresh remote refs
git rebase origin/main       # 3. replay onto the latest main
git push --force-with-lease  # 4. update the remote branch
```
- Only force push a branch nobody else is working on.
";

const SAFETY: &str = "
## Permanent Data Loss
```
git restore .                # throws away local edits
git reset --hard             # throws away commits and edits
git push --force             # can overwrite someone else's work
```

## Safer Alternatives
```
git stash                    # park changes instead of discarding them
git push --force-with-lease  # refuses if the remote moved
```

## Before You Run One
- Check which branch you are on.
- Make sure the work exists somewhere else.
- Use --dry-run where it is offered.
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_a_heading_and_a_closed_code_block() {
        for section in SECTIONS {
            assert!(!section.pages.is_empty(), "{} is empty", section.name);
            for page in section.pages {
                assert!(page.body.contains("## "), "{} has no heading", page.title);
                assert_eq!(
                    page.body.matches("```").count() % 2,
                    0,
                    "{} has an unclosed code block",
                    page.title
                );
            }
        }
    }
}
